use super::*;

#[test]
fn default_config_uses_documented_values() {
    let config = StoreConfig::default();
    assert_eq!(config.favorites_key, "favorites-storage");
    assert_eq!(config.comparison_key, "comparison-storage");
    assert_eq!(config.compare_capacity, 3);
    assert_eq!(config.recently_viewed_capacity, 10);
    assert_eq!(config.hydration_fallback_ms, 100);
}

#[test]
fn with_key_prefix_namespaces_both_keys() {
    let config = StoreConfig::default().with_key_prefix("dealer-a");
    assert_eq!(config.favorites_key, "dealer-a:favorites-storage");
    assert_eq!(config.comparison_key, "dealer-a:comparison-storage");
    assert_eq!(config.compare_capacity, DEFAULT_COMPARE_CAPACITY);
}

#[test]
fn with_key_prefix_ignores_blank_prefix() {
    assert_eq!(StoreConfig::default().with_key_prefix("  "), StoreConfig::default());
}
