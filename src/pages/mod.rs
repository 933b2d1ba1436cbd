//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads collection stores from context and delegates rendering
//! details to `components`.

pub mod compare;
pub mod favorites;
