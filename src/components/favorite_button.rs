//! Heart toggle that adds or removes a vehicle from favorites.

#[cfg(test)]
#[path = "favorite_button_test.rs"]
mod favorite_button_test;

use leptos::prelude::*;

use crate::state::favorites::FavoritesStore;
use crate::state::hydration::Hydratable;
use crate::state::vehicle::Vehicle;

fn favorite_title(active: bool) -> &'static str {
    if active { "Remove from favorites" } else { "Add to favorites" }
}

fn favorite_glyph(active: bool) -> &'static str {
    if active { "♥" } else { "♡" }
}

/// Disabled until favorites are hydrated so a click can't be lost to the
/// snapshot load.
#[component]
pub fn FavoriteButton(vehicle: Vehicle) -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesStore>>();
    let id = vehicle.id.clone();
    let active = Memo::new(move |_| favorites.with(|s| s.is_favorite(&id)));
    let hydrated = Memo::new(move |_| favorites.with(Hydratable::is_hydrated));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let vehicle = vehicle.clone();
        favorites.update(|s| {
            s.toggle(vehicle);
        });
    };

    view! {
        <button
            class="favorite-button"
            class:favorite-button--active=move || active.get()
            disabled=move || !hydrated.get()
            aria-pressed=move || active.get().to_string()
            title=move || favorite_title(active.get())
            aria-label=move || favorite_title(active.get())
            on:click=on_click
        >
            {move || favorite_glyph(active.get())}
        </button>
    }
}
