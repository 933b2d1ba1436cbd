//! Favorite vehicles and the recently-viewed history.
//!
//! DESIGN
//! ======
//! The store is an explicit object owned by the root component and handed to
//! consumers through context. Every mutation on a hydrated store updates
//! memory first and then writes the whole snapshot through storage before
//! returning. Mutations made before hydration stay in memory only and are
//! replaced by the loaded snapshot (empty when nothing could be loaded).
//!
//! When the fallback hydrates the store before its snapshot was read, the
//! snapshot is folded in on the late load or on the next mutation, whichever
//! comes first, so the visitor's saved favorites are never overwritten.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use serde::{Deserialize, Serialize};

use super::hydration::{Hydratable, HydrationPhase};
use super::vehicle::Vehicle;
use crate::config::StoreConfig;
use crate::util::persist::SnapshotSlot;
use crate::util::storage::SharedStorage;

/// Persisted form of [`FavoritesStore`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesSnapshot {
    pub items: Vec<Vehicle>,
    #[serde(default)]
    pub recently_viewed: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct FavoritesStore {
    slot: SnapshotSlot,
    recently_viewed_capacity: usize,
    items: Vec<Vehicle>,
    recently_viewed: Vec<String>,
    phase: HydrationPhase,
}

impl FavoritesStore {
    pub fn new(storage: SharedStorage, config: &StoreConfig) -> Self {
        Self {
            slot: SnapshotSlot::new(storage, config.favorites_key.clone()),
            recently_viewed_capacity: config.recently_viewed_capacity,
            items: Vec::new(),
            recently_viewed: Vec::new(),
            phase: HydrationPhase::Unhydrated,
        }
    }

    /// Favorites in insertion order.
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
    pub fn is_favorite(&self, id: &str) -> bool {
        self.items.iter().any(|v| v.id == id)
    }

    /// Insert `vehicle` unless its id is already present.
    pub fn add(&mut self, vehicle: Vehicle) -> bool {
        self.catch_up();
        if self.is_favorite(&vehicle.id) {
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

    /// Flip membership. Returns whether the vehicle is a favorite afterwards.
    pub fn toggle(&mut self, vehicle: Vehicle) -> bool {
        self.catch_up();
        if self.is_favorite(&vehicle.id) {
            self.remove(&vehicle.id);
            false
        } else {
            self.add(vehicle)
        }
    }

    pub fn clear(&mut self) {
        self.catch_up();
        self.items.clear();
        self.persist();
    }

    /// Move `id` to the front of the history, dropping entries past capacity.
    pub fn add_recently_viewed(&mut self, id: &str) {
        self.catch_up();
        self.recently_viewed.retain(|existing| existing != id);
        self.recently_viewed.insert(0, id.to_owned());
        self.recently_viewed.truncate(self.recently_viewed_capacity);
        self.persist();
    }

    /// Most recent first.
    #[must_use]
    pub fn recently_viewed_ids(&self) -> &[String] {
        &self.recently_viewed
    }

    /// Set the hydration flag. `Hydrated` is terminal, so `false` after
    /// hydration is ignored.
    pub fn set_hydrated(&mut self, hydrated: bool) {
        if hydrated {
            self.phase.complete();
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> FavoritesSnapshot {
        FavoritesSnapshot { items: self.items.clone(), recently_viewed: self.recently_viewed.clone() }
    }

    fn restore(&mut self, snapshot: FavoritesSnapshot) {
        self.items.clear();
        self.recently_viewed.clear();
        self.merge(snapshot);
    }

    /// Fold a stored snapshot under the current contents: stored favorites
    /// keep their order ahead of newer ones, and current history stays most
    /// recent.
    fn merge(&mut self, snapshot: FavoritesSnapshot) {
        let added = std::mem::take(&mut self.items);
        for vehicle in snapshot.items.into_iter().chain(added) {
            if !self.is_favorite(&vehicle.id) {
                self.items.push(vehicle);
            }
        }
        for id in snapshot.recently_viewed {
            if !self.recently_viewed.contains(&id) {
                self.recently_viewed.push(id);
            }
        }
        self.recently_viewed.truncate(self.recently_viewed_capacity);
    }

    /// Hydrated by the fallback but the snapshot not read yet: read it now,
    /// before a mutation would write over it.
    fn catch_up(&mut self) {
        if !self.phase.is_hydrated() || self.slot.is_settled() {
            return;
        }
        if let Some(snapshot) = self.slot.read::<FavoritesSnapshot>() {
            self.merge(snapshot);
        }
    }

    fn persist(&self) {
        if self.phase.is_hydrated() {
            self.slot.write(&self.snapshot());
        }
    }
}

impl Hydratable for FavoritesStore {
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
        let snapshot = self.slot.read::<FavoritesSnapshot>().unwrap_or_default();
        self.restore(snapshot);
        self.phase.complete();
    }
}
