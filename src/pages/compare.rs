//! Side-by-side comparison of the staged vehicles.

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

use leptos::prelude::*;

use crate::components::collection_skeleton::CollectionSkeleton;
use crate::components::vehicle_card::format_price;
use crate::state::comparison::ComparisonStore;
use crate::state::hydration::Hydratable;
use crate::state::vehicle::{Vehicle, format_grouped};

const MISSING: &str = "—";

/// Table rows: a label and one cell per vehicle, in list order.
pub(crate) fn comparison_rows(vehicles: &[Vehicle]) -> Vec<(&'static str, Vec<String>)> {
    fn cells(vehicles: &[Vehicle], f: impl Fn(&Vehicle) -> Option<String>) -> Vec<String> {
        vehicles.iter().map(|v| f(v).unwrap_or_else(|| MISSING.to_owned())).collect()
    }

    vec![
        ("Price", cells(vehicles, |v| v.price.map(format_price))),
        ("Year", cells(vehicles, |v| v.year.map(|y| y.to_string()))),
        ("Mileage", cells(vehicles, |v| v.mileage.map(|m| format!("{} km", format_grouped(m))))),
        ("Fuel", cells(vehicles, |v| v.fuel_type.clone())),
        ("Transmission", cells(vehicles, |v| v.transmission.clone())),
    ]
}

#[component]
pub fn ComparePage() -> impl IntoView {
    let comparison = expect_context::<RwSignal<ComparisonStore>>();
    let hydrated = move || comparison.with(Hydratable::is_hydrated);
    let has_items = move || !comparison.with(ComparisonStore::is_empty);

    let header = move || {
        comparison.with(|s| {
            s.items()
                .iter()
                .map(|v| {
                    let id = v.id.clone();
                    view! {
                        <th scope="col">
                            {v.title()}
                            <button
                                class="compare-table__remove"
                                on:click=move |_| comparison.update(|s| s.remove(&id))
                            >
                                "Remove"
                            </button>
                        </th>
                    }
                })
                .collect_view()
        })
    };
    let body = move || {
        comparison
            .with(|s| comparison_rows(s.items()))
            .into_iter()
            .map(|(label, cells)| {
                view! {
                    <tr>
                        <th scope="row">{label}</th>
                        {cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <main class="compare-page">
            <h1 class="compare-page__title">"Compare vehicles"</h1>
            <Show when=hydrated fallback=|| view! { <CollectionSkeleton rows=1/> }>
                <Show
                    when=has_items
                    fallback=|| view! { <p class="empty-state">"Add up to three vehicles to compare them."</p> }
                >
                    <table class="compare-table">
                        <thead>
                            <tr>
                                <th></th>
                                {header}
                            </tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </Show>
            </Show>
        </main>
    }
}
