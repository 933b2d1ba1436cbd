//! Vehicles staged for side-by-side comparison.
//!
//! Same persistence and hydration contract as `favorites`, with a hard
//! capacity (3 by default). A snapshot read after the fallback keeps its
//! entries ahead of ones staged since, up to capacity. Rejections are ordinary outcomes reported as
//! `false` / [`Admission`], never errors.

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

use serde::{Deserialize, Serialize};

use super::hydration::{Hydratable, HydrationPhase};
use super::vehicle::Vehicle;
use crate::config::StoreConfig;
use crate::util::persist::SnapshotSlot;
use crate::util::storage::SharedStorage;

/// Persisted form of [`ComparisonStore`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSnapshot {
    pub items: Vec<Vehicle>,
}

/// Whether a vehicle may join the comparison list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    AlreadyPresent,
    Full,
}

impl Admission {
    /// User-facing explanation for a rejected add.
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Admitted => None,
            Self::AlreadyPresent => Some("Already in comparison"),
            Self::Full => Some("Comparison list is full"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ComparisonStore {
    slot: SnapshotSlot,
    capacity: usize,
    items: Vec<Vehicle>,
    phase: HydrationPhase,
}

impl ComparisonStore {
    pub fn new(storage: SharedStorage, config: &StoreConfig) -> Self {
        Self {
            slot: SnapshotSlot::new(storage, config.comparison_key.clone()),
            capacity: config.compare_capacity,
            items: Vec::new(),
            phase: HydrationPhase::Unhydrated,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Vehicle] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[must_use]
    pub fn is_in_list(&self, id: &str) -> bool {
        self.items.iter().any(|v| v.id == id)
    }

    /// Classify an add without performing it. Capacity is checked first.
    #[must_use]
    pub fn admission(&self, vehicle: &Vehicle) -> Admission {
        if self.is_full() {
            Admission::Full
        } else if self.is_in_list(&vehicle.id) {
            Admission::AlreadyPresent
        } else {
            Admission::Admitted
        }
    }

    /// Append `vehicle` when there is room and its id is new.
    pub fn add(&mut self, vehicle: Vehicle) -> bool {
        self.catch_up();
        if self.admission(&vehicle) != Admission::Admitted {
            return false;
        }
        self.items.push(vehicle);
        self.persist();
        true
    }

    pub fn remove(&mut self, id: &str) {
        self.catch_up();
        self.items.retain(|v| v.id != id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.catch_up();
        self.items.clear();
        self.persist();
    }

    /// Set the hydration flag. `false` after hydration is ignored.
    pub fn set_hydrated(&mut self, hydrated: bool) {
        if hydrated {
            self.phase.complete();
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ComparisonSnapshot {
        ComparisonSnapshot { items: self.items.clone() }
    }

    fn restore(&mut self, snapshot: ComparisonSnapshot) {
        self.items.clear();
        self.merge(snapshot);
    }

    fn merge(&mut self, snapshot: ComparisonSnapshot) {
        let staged = std::mem::take(&mut self.items);
        for vehicle in snapshot.items.into_iter().chain(staged) {
            if self.admission(&vehicle) == Admission::Admitted {
                self.items.push(vehicle);
            }
        }
    }

    fn catch_up(&mut self) {
        if !self.phase.is_hydrated() || self.slot.is_settled() {
            return;
        }
        if let Some(snapshot) = self.slot.read::<ComparisonSnapshot>() {
            self.merge(snapshot);
        }
    }

    fn persist(&self) {
        if self.phase.is_hydrated() {
            self.slot.write(&self.snapshot());
        }
    }
}

impl Hydratable for ComparisonStore {
    fn is_hydrated(&self) -> bool {
        self.phase.is_hydrated()
    }

    fn mark_hydrated(&mut self) -> bool {
        self.phase.complete()
    }

    fn rehydrate(&mut self) {
        if self.phase.is_hydrated() {
            if !self.slot.is_settled() {
                self.catch_up();
                self.persist();
            }
            return;
        }
        let snapshot = self.slot.read::<ComparisonSnapshot>().unwrap_or_default();
        self.restore(snapshot);
        self.phase.complete();
    }
}
