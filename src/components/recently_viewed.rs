//! Links to the vehicles the visitor opened most recently.

#[cfg(test)]
#[path = "recently_viewed_test.rs"]
mod recently_viewed_test;

use leptos::prelude::*;

use crate::components::vehicle_card::vehicle_href;
use crate::state::favorites::FavoritesStore;
use crate::state::vehicle::Vehicle;

/// Pair each recently viewed id with a display label, using a favorite's title
/// when the id is also a favorite.
fn recently_viewed_entries(store: &FavoritesStore) -> Vec<(String, String)> {
    store
        .recently_viewed_ids()
        .iter()
        .map(|id| {
            let label = store
                .items()
                .iter()
                .find(|v| &v.id == id)
                .map(Vehicle::title)
                .filter(|title| !title.is_empty())
                .unwrap_or_else(|| id.clone());
            (id.clone(), label)
        })
        .collect()
}

#[component]
pub fn RecentlyViewed() -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesStore>>();
    let entries = move || favorites.with(recently_viewed_entries);

    view! {
        <Show when=move || favorites.with(|s| !s.recently_viewed_ids().is_empty())>
            <section class="recently-viewed">
                <h2 class="recently-viewed__title">"Recently viewed"</h2>
                <ol class="recently-viewed__list">
                    <For
                        each=entries
                        key=|(id, _)| id.clone()
                        children=|(id, label): (String, String)| {
                            view! {
                                <li>
                                    <a href=vehicle_href(&id)>{label}</a>
                                </li>
                            }
                        }
                    />
                </ol>
            </section>
        </Show>
    }
}
