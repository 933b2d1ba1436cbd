//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and mutate the collection stores through Leptos context
//! providers installed by `App`.

pub mod collection_skeleton;
pub mod compare_button;
pub mod compare_tray;
pub mod favorite_button;
pub mod recently_viewed;
pub mod vehicle_card;
