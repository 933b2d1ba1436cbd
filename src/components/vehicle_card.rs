//! Card summarizing one vehicle with favorite and compare actions.
//!
//! DESIGN
//! ======
//! Opening the detail link records the vehicle in the recently-viewed history
//! before navigation, so the history survives even if the detail route fails.

#[cfg(test)]
#[path = "vehicle_card_test.rs"]
mod vehicle_card_test;

use leptos::prelude::*;

use crate::components::compare_button::CompareButton;
use crate::components::favorite_button::FavoriteButton;
use crate::state::favorites::FavoritesStore;
use crate::state::vehicle::{Vehicle, format_grouped};

/// Detail route for a vehicle listing.
pub fn vehicle_href(id: &str) -> String {
    format!("/vehicles/{id}")
}

pub fn format_price(price: u64) -> String {
    format!("€{}", format_grouped(price))
}

/// Key facts for the card: year, mileage, fuel, transmission.
pub fn vehicle_facts(vehicle: &Vehicle) -> Vec<String> {
    let mut facts = Vec::new();
    if let Some(year) = vehicle.year {
        facts.push(year.to_string());
    }
    if let Some(mileage) = vehicle.mileage {
        facts.push(format!("{} km", format_grouped(mileage)));
    }
    facts.extend(vehicle.fuel_type.iter().cloned());
    facts.extend(vehicle.transmission.iter().cloned());
    facts
}

#[component]
pub fn VehicleCard(vehicle: Vehicle) -> impl IntoView {
    let favorites = expect_context::<RwSignal<FavoritesStore>>();
    let id = vehicle.id.clone();
    let href = vehicle_href(&vehicle.id);
    let title = vehicle.title();
    let price = vehicle.price.map(format_price);
    let facts = vehicle_facts(&vehicle).join(" · ");
    let image = vehicle.image_url.clone().map(|src| {
        let alt = title.clone();
        view! { <img class="vehicle-card__image" src=src alt=alt loading="lazy"/> }
    });

    view! {
        <article class="vehicle-card">
            {image}
            <a
                class="vehicle-card__title"
                href=href
                on:click=move |_| favorites.update(|s| s.add_recently_viewed(&id))
            >
                {title}
            </a>
            <span class="vehicle-card__facts">{facts}</span>
            {price.map(|p| view! { <span class="vehicle-card__price">{p}</span> })}
            <span class="vehicle-card__actions">
                <FavoriteButton vehicle=vehicle.clone()/>
                <CompareButton vehicle=vehicle/>
            </span>
        </article>
    }
}
