use yew::prelude::*;

use crate::components::{Chart, LastUpdated, RegionSelector, Summary};
use crate::hooks::use_region::use_region;
use crate::hooks::use_summary::use_summary;
use crate::hooks::use_timeseries::use_timeseries;
use crate::hooks::use_version::use_version;

/// Root dashboard component.
///
/// The selected region drives three independent fetches; each slice of the
/// page repaints the moment its own fetch resolves.
#[function_component(App)]
pub fn app() -> Html {
    let region_handle = use_region();
    let version = use_version(region_handle.region);
    let summary = use_summary(region_handle.region);
    let timeseries = use_timeseries(region_handle.region);

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"COVID-19 Dashboard"}</h1>
            </header>

            <main class="app-main">
                <section class="menu-section">
                    <RegionSelector
                        region={region_handle.region}
                        on_change={region_handle.set_region.clone()}
                    />
                    <LastUpdated version={(*version).clone()} />
                </section>

                <section class="chart-section">
                    <Chart timeseries={(*timeseries).clone()} />
                </section>

                <section class="summary-section">
                    <Summary record={(*summary).clone()} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
