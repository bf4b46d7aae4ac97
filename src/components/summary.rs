use yew::prelude::*;

use crate::models::{metric::Metric, summary::SummaryRecord};

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub record: SummaryRecord,
}

/// Card display order, distinct from the chart's series order.
const CARD_ORDER: [Metric; 4] = [
    Metric::Cases,
    Metric::TestsCompleted,
    Metric::Deaths,
    Metric::VaccineTotalDoses,
];

/// Grid of the four cumulative-total cards.
#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    html! {
        <div class="summary-grid">
            {
                CARD_ORDER.iter().map(|metric| html! {
                    <MetricCard
                        title={metric.card_title()}
                        value={props.record.formatted(*metric)}
                    />
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: &'static str,
    pub value: Option<String>,
}

/// A single card: metric title over its formatted total, blank when the
/// API reported nothing for the metric.
#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class="summary-card">
            <h3>{props.title}</h3>
            <p class="summary-value">
                { props.value.clone().unwrap_or_default() }
            </p>
        </div>
    }
}
