//! Button that stages or unstages a vehicle for comparison.
//!
//! ERROR HANDLING
//! ==============
//! A rejected add (list full, already staged) is shown inline next to the
//! button; nothing is raised.

#[cfg(test)]
#[path = "compare_button_test.rs"]
mod compare_button_test;

use leptos::prelude::*;

use crate::state::comparison::ComparisonStore;
use crate::state::hydration::Hydratable;
use crate::state::vehicle::Vehicle;

/// Remove `vehicle` if staged, otherwise try to add it. Returns the message to
/// show when the add was rejected.
pub fn toggle_compare(store: &mut ComparisonStore, vehicle: Vehicle) -> Option<&'static str> {
    if store.is_in_list(&vehicle.id) {
        store.remove(&vehicle.id);
        return None;
    }
    let admission = store.admission(&vehicle);
    if store.add(vehicle) { None } else { admission.message() }
}

fn compare_label(in_list: bool) -> &'static str {
    if in_list { "Remove from comparison" } else { "Compare" }
}

#[component]
pub fn CompareButton(vehicle: Vehicle) -> impl IntoView {
    let comparison = expect_context::<RwSignal<ComparisonStore>>();
    let notice = RwSignal::new(None::<&'static str>);
    let id = vehicle.id.clone();
    let in_list = Memo::new(move |_| comparison.with(|s| s.is_in_list(&id)));
    let hydrated = Memo::new(move |_| comparison.with(Hydratable::is_hydrated));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let message = comparison.try_update(|s| toggle_compare(s, vehicle.clone())).flatten();
        notice.set(message);
    };

    view! {
        <span class="compare-button">
            <button
                class="compare-button__toggle"
                class:compare-button__toggle--active=move || in_list.get()
                disabled=move || !hydrated.get()
                aria-pressed=move || in_list.get().to_string()
                on:click=on_click
            >
                {move || compare_label(in_list.get())}
            </button>
            <Show when=move || notice.get().is_some()>
                <span class="compare-button__notice" role="status">
                    {move || notice.get().unwrap_or_default()}
                </span>
            </Show>
        </span>
    }
}
