use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::Config;
use crate::services::api::{Region, fetch_version};

/// Fetches the dataset version string for the "Last Updated" label.
///
/// The endpoint is not region-scoped, but the label is re-fetched on every
/// region change so the three requests of a fetch cycle stay in step.
#[hook]
pub fn use_version(region: Region) -> UseStateHandle<String> {
    let state = use_state(String::new);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with((trigger_value, region), move |_| {
            let state = state.clone();
            let trigger = trigger.clone();
            let stale = Rc::new(Cell::new(false));
            let stale_check = stale.clone();

            spawn_local(async move {
                match fetch_version().await {
                    Ok(version) if !stale_check.get() => state.set(version),
                    Err(e) if !stale_check.get() => {
                        gloo::console::error!(format!("Error fetching version: {e}"));
                        state.set(String::new());
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
