//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers)
//! from store and component logic to improve reuse and testability.

pub mod hydrate_trigger;
pub mod persist;
pub mod storage;
