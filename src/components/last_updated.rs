use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LastUpdatedProps {
    pub version: String,
}

/// Renders the dataset version verbatim, or nothing until it loads.
#[function_component(LastUpdated)]
pub fn last_updated(props: &LastUpdatedProps) -> Html {
    html! {
        <p class="update-date">
            {"Last Updated: "}{&props.version}
        </p>
    }
}
