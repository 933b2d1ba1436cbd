//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::compare_tray::CompareTray;
use crate::config::StoreConfig;
use crate::pages::{compare::ComparePage, favorites::FavoritesPage};
use crate::state::comparison::ComparisonStore;
use crate::state::favorites::FavoritesStore;
use crate::state::hydration::Hydratable;
use crate::util::hydrate_trigger::start_hydration;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Nav badge text; hidden until hydrated and for empty collections.
fn nav_badge(len: usize, hydrated: bool) -> Option<String> {
    (hydrated && len > 0).then(|| len.to_string())
}

/// Root application component.
///
/// Owns the collection stores, provides them as context and starts their
/// hydration from browser storage.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StoreConfig::from_build_env();
    let storage = LocalStorage::shared();
    let favorites = RwSignal::new(FavoritesStore::new(Arc::clone(&storage), &config));
    let comparison = RwSignal::new(ComparisonStore::new(storage, &config));

    provide_context(favorites);
    provide_context(comparison);

    start_hydration(favorites, comparison, config.hydration_fallback_ms);

    let favorites_badge = move || favorites.with(|s| nav_badge(s.len(), s.is_hydrated()));
    let comparison_badge = move || comparison.with(|s| nav_badge(s.len(), s.is_hydrated()));

    view! {
        <Stylesheet id="leptos" href="/pkg/showroom.css"/>
        <Title text="Showroom"/>

        <Router>
            <nav class="site-nav">
                <a class="site-nav__link" href="/favorites">
                    "Favorites"
                    <span class="site-nav__badge">{favorites_badge}</span>
                </a>
                <a class="site-nav__link" href="/compare">
                    "Compare"
                    <span class="site-nav__badge">{comparison_badge}</span>
                </a>
            </nav>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=FavoritesPage/>
                <Route path=StaticSegment("favorites") view=FavoritesPage/>
                <Route path=StaticSegment("compare") view=ComparePage/>
            </Routes>
            <CompareTray/>
        </Router>
    }
}
