//! Placeholder shown while a collection store is still unhydrated.

use leptos::prelude::*;

#[component]
pub fn CollectionSkeleton(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <div class="collection-skeleton" aria-busy="true" aria-label="Loading">
            {(0..rows).map(|_| view! { <div class="collection-skeleton__row"></div> }).collect_view()}
        </div>
    }
}
