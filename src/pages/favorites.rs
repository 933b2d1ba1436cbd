//! Favorites page: saved vehicles plus the recently-viewed history.

use leptos::prelude::*;

use crate::components::collection_skeleton::CollectionSkeleton;
use crate::components::recently_viewed::RecentlyViewed;
use crate::components::vehicle_card::VehicleCard;
use crate::state::favorites::FavoritesStore;
use crate::state::hydration::Hydratable;
use crate::state::vehicle::Vehicle;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesStore>>();
    let hydrated = move || favorites.with(Hydratable::is_hydrated);
    let has_items = move || !favorites.with(FavoritesStore::is_empty);
    let on_clear = move |_| favorites.update(FavoritesStore::clear);

    view! {
        <main class="favorites-page">
            <h1 class="favorites-page__title">"Favorites"</h1>
            <Show when=hydrated fallback=|| view! { <CollectionSkeleton/> }>
                <Show
                    when=has_items
                    fallback=|| view! { <p class="empty-state">"You haven't saved any vehicles yet."</p> }
                >
                    <div class="vehicle-grid">
                        <For
                            each=move || favorites.with(|s| s.items().to_vec())
                            key=|vehicle| vehicle.id.clone()
                            children=|vehicle: Vehicle| view! { <VehicleCard vehicle=vehicle/> }
                        />
                    </div>
                    <button class="favorites-page__clear" on:click=on_clear>"Clear favorites"</button>
                </Show>
                <RecentlyViewed/>
            </Show>
        </main>
    }
}
