use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{AxisLabel, AxisType, ItemStyle, LineStyle, Symbol},
    renderer::WasmRenderer,
    series::Line,
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::timeseries::Timeseries;

const CHART_ID: &str = "timeseries-chart";

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub timeseries: Rc<Timeseries>,
}

/// Overlaid line chart of the four metric time series.
///
/// Re-rendered whenever the series data changes or the window resizes;
/// charming draws into a fixed-id div sized to the container.
#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let timeseries = props.timeseries.clone();
        let container_ref = container_ref.clone();

        use_effect_with(
            (timeseries, container_ref),
            |(timeseries, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, timeseries);

                    let timeseries = timeseries.clone();
                    EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                        render_chart(&container, &timeseries);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, timeseries: &Timeseries) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(timeseries);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

fn build_chart(timeseries: &Timeseries) -> CharmingChart {
    let mut chart = CharmingChart::new()
        .legend(Legend::new().top("top"))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(timeseries.x_labels())
                .axis_label(AxisLabel::new().rotate(45)),
        )
        // Tooltips stay disabled: no Tooltip component is attached.
        .y_axis(Axis::new().type_(AxisType::Value).min(0));

    for series in timeseries.series() {
        let color = series.metric.color();
        chart = chart.series(
            Line::new()
                .name(series.metric.label())
                .data(series.values())
                .symbol(Symbol::None)
                .item_style(ItemStyle::new().color(color))
                .line_style(LineStyle::new().color(color)),
        );
    }

    chart
}
