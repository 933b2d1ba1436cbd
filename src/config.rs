//! Store configuration: storage keys, capacities and the hydration window.
//!
//! Values are fixed at build time. A deployment that shares an origin with
//! another site can namespace its keys with `SHOWROOM_STORAGE_PREFIX`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_FAVORITES_KEY: &str = "favorites-storage";
pub const DEFAULT_COMPARISON_KEY: &str = "comparison-storage";
pub const DEFAULT_COMPARE_CAPACITY: usize = 3;
pub const DEFAULT_RECENTLY_VIEWED_CAPACITY: usize = 10;
pub const DEFAULT_HYDRATION_FALLBACK_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub favorites_key: String,
    pub comparison_key: String,
    pub compare_capacity: usize,
    pub recently_viewed_capacity: usize,
    pub hydration_fallback_ms: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            favorites_key: DEFAULT_FAVORITES_KEY.to_owned(),
            comparison_key: DEFAULT_COMPARISON_KEY.to_owned(),
            compare_capacity: DEFAULT_COMPARE_CAPACITY,
            recently_viewed_capacity: DEFAULT_RECENTLY_VIEWED_CAPACITY,
            hydration_fallback_ms: DEFAULT_HYDRATION_FALLBACK_MS,
        }
    }
}

impl StoreConfig {
    /// Build config from build-time environment.
    ///
    /// Optional:
    /// - `SHOWROOM_STORAGE_PREFIX`: prepended to both storage keys
    #[must_use]
    pub fn from_build_env() -> Self {
        let config = Self::default();
        match option_env!("SHOWROOM_STORAGE_PREFIX") {
            Some(prefix) => config.with_key_prefix(prefix),
            None => config,
        }
    }

    /// Namespace both storage keys as `{prefix}:{key}`. Blank prefixes are ignored.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: &str) -> Self {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return self;
        }
        self.favorites_key = format!("{prefix}:{}", self.favorites_key);
        self.comparison_key = format!("{prefix}:{}", self.comparison_key);
        self
    }
}
