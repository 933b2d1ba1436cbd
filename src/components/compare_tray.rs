//! Floating tray listing the vehicles staged for comparison.
//!
//! Hidden until the comparison store is hydrated and non-empty.

#[cfg(test)]
#[path = "compare_tray_test.rs"]
mod compare_tray_test;

use leptos::prelude::*;

use crate::state::comparison::ComparisonStore;
use crate::state::hydration::Hydratable;
use crate::state::vehicle::Vehicle;

fn tray_count_label(len: usize, capacity: usize) -> String {
    format!("{len}/{capacity}")
}

fn tray_item_label(vehicle: &Vehicle) -> String {
    let title = vehicle.title();
    if title.is_empty() { vehicle.id.clone() } else { title }
}

#[component]
pub fn CompareTray() -> impl IntoView {
    let comparison = expect_context::<RwSignal<ComparisonStore>>();
    let visible = move || comparison.with(|s| s.is_hydrated() && !s.is_empty());
    let count = move || comparison.with(|s| tray_count_label(s.len(), s.capacity()));
    let on_clear = move |_| comparison.update(ComparisonStore::clear);

    view! {
        <Show when=visible>
            <aside class="compare-tray" aria-label="Comparison">
                <span class="compare-tray__count">{count}</span>
                <ul class="compare-tray__items">
                    <For
                        each=move || comparison.with(|s| s.items().to_vec())
                        key=|vehicle| vehicle.id.clone()
                        children=move |vehicle: Vehicle| {
                            let id = vehicle.id.clone();
                            view! {
                                <li class="compare-tray__item">
                                    <span class="compare-tray__name">{tray_item_label(&vehicle)}</span>
                                    <button
                                        class="compare-tray__remove"
                                        title="Remove"
                                        aria-label="Remove"
                                        on:click=move |_| comparison.update(|s| s.remove(&id))
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <a class="compare-tray__open" href="/compare">"Compare"</a>
                <button class="compare-tray__clear" on:click=on_clear>"Clear"</button>
            </aside>
        </Show>
    }
}
