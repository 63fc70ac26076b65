use bhasha::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_level_is_info() {
    let config = TracingConfig::default();
    assert_eq!(config.level, "info");
    assert!(!config.environment.is_empty());
}
