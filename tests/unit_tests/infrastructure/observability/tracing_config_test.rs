use contract_analyzer::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_is_local_pretty_info() {
    let config = TracingConfig::default();

    assert_eq!(config.environment, "local");
    assert_eq!(config.default_level, "info");
    assert!(!config.json_format);
}

#[test]
fn given_level_when_building_filter_directive_then_applies_to_crate_and_default() {
    let config = TracingConfig {
        default_level: "debug".to_string(),
        ..TracingConfig::default()
    };

    let directive = config.env_filter_directive();

    assert!(directive.starts_with("debug,"));
    assert!(directive.contains("contract_analyzer=debug"));
}
