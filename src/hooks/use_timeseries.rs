use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::timeseries::Timeseries;
use crate::services::api::{Region, fetch_timeseries_for_region};

/// Fetches the per-metric time series for `region`. Independent of the
/// summary and version fetches: the chart repaints as soon as this slice
/// resolves, and keeps the previous series until then.
#[hook]
pub fn use_timeseries(region: Region) -> UseStateHandle<Rc<Timeseries>> {
    let state = use_state(|| Rc::new(Timeseries::default()));
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, region), move |(_, region)| {
            let state = state.clone();
            let trigger = trigger.clone();
            let region = *region;
            let stale = Rc::new(Cell::new(false));
            let stale_check = stale.clone();

            spawn_local(async move {
                match fetch_timeseries_for_region(region).await {
                    Ok(series) if !stale_check.get() => state.set(Rc::new(series)),
                    Err(e) if !stale_check.get() => {
                        gloo::console::error!(format!("Error fetching timeseries data: {e}"));
                        state.set(Rc::new(Timeseries::default()));
                    }
                    _ => {} // Superseded by a newer region selection, ignore result
                }

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH && !stale_check.get() {
                    TimeoutFuture::new(Config::POLLING_INTERVAL_MS).await;
                    if !stale_check.get() {
                        trigger.set(*trigger + 1); // Trigger next fetch
                    }
                }
            });

            move || {
                stale.set(true);
            }
        });
    }

    state
}
