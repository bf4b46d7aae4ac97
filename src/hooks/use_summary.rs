use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::models::summary::SummaryRecord;
use crate::services::api::{Region, fetch_summary_for_region};

/// Fetches the cumulative summary for `region`, refetching whenever the
/// selection changes. A fetch failure is logged and blanks the cards; it
/// never disturbs the version or timeseries slices.
#[hook]
pub fn use_summary(region: Region) -> UseStateHandle<SummaryRecord> {
    let state = use_state(SummaryRecord::default);
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
                match fetch_summary_for_region(region).await {
                    Ok(record) if !stale_check.get() => state.set(record),
                    Err(e) if !stale_check.get() => {
                        gloo::console::error!(format!("Error fetching summary data: {e}"));
                        state.set(SummaryRecord::default());
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
