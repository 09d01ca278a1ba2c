use newsboard_core::config::ObservabilityConfig;
use newsboard_observability::init_from_config;
use newsboard_observability::tracing_setup::events;

#[test]
fn init_from_config_installs_once_and_events_emit() {
    let config = ObservabilityConfig {
        log_level: "trace".to_string(),
        json_logs: false,
    };
    assert!(init_from_config(&config), "first install should succeed");
    // A second global subscriber cannot be installed.
    assert!(!init_from_config(&ObservabilityConfig::default()));

    events::listing_ranked("freshness", 42, 2, 20, 20);
    events::page_beyond_range(9, 3);
    events::item_scored("s1", "story", "comments", 2, 95.1, 2.5, 1.46, 0.6, 99.66);
    events::item_scored("c1", "comment", "replies", 0, 49.2, 0.7, 1.9, 0.0, 51.8);
}
