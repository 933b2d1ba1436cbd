//! Client-side collection state.
//!
//! DESIGN
//! ======
//! Each collection is its own store object with its own storage key, so the
//! favorites and comparison lists never coordinate or block one another.

pub mod comparison;
pub mod favorites;
pub mod hydration;
pub mod vehicle;
