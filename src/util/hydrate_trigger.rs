//! Startup hydration of the collection stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! Called once by the root component. In the browser each store loads its
//! snapshot on the next task while a `gloo-timers` timeout forces hydration
//! after the fallback window, so the UI never waits on storage forever.
//! Server rendering leaves both stores unhydrated so its markup matches the
//! client's first paint.

#[cfg(test)]
#[path = "hydrate_trigger_test.rs"]
mod hydrate_trigger_test;

use leptos::prelude::*;

use crate::state::comparison::ComparisonStore;
use crate::state::favorites::FavoritesStore;
#[cfg(feature = "hydrate")]
use crate::state::hydration::{Hydratable, HydrationOutcome, HydrationRun, WallClock};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

/// Load both stores from storage, with a `fallback_ms` safety net.
///
/// The fallback timeouts are owned by the calling reactive scope and are
/// cancelled when it is cleaned up.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn start_hydration(favorites: RwSignal<FavoritesStore>, comparison: RwSignal<ComparisonStore>, fallback_ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        let timers = StoredValue::new_local(vec![
            hydrate_in_browser("favorites", favorites, fallback_ms),
            hydrate_in_browser("comparison", comparison, fallback_ms),
        ]);
        on_cleanup(move || {
            timers.try_update_value(Vec::clear);
        });
    }
}

/// Spawn the snapshot load and arm the fallback. Dropping the returned
/// timeout cancels the fallback.
#[cfg(feature = "hydrate")]
fn hydrate_in_browser<S>(label: &'static str, store: RwSignal<S>, fallback_ms: u32) -> Timeout
where
    S: Hydratable + Send + Sync + 'static,
{
    let run = Rc::new(RefCell::new(HydrationRun::start(WallClock, fallback_ms)));

    let load_run = Rc::clone(&run);
    leptos::task::spawn_local(async move {
        let outcome = store.try_update(|s| load_run.borrow_mut().on_rehydrated(s)).flatten();
        report(label, outcome);
    });

    Timeout::new(fallback_ms, move || {
        let outcome = store.try_update(|s| run.borrow_mut().on_deadline(s)).flatten();
        report(label, outcome);
    })
}

#[cfg(feature = "hydrate")]
fn report(label: &str, outcome: Option<HydrationOutcome>) {
    if let Some(outcome) = outcome {
        log::debug!("{label} hydrated via {:?} after {:.0}ms", outcome.trigger, outcome.elapsed_ms);
    }
}
