// tests/config_env_test.rs
//
// CheckConfig::resolve reads the process environment, so these tests mutate
// it and must not run concurrently with each other.

use serial_test::serial;

use version_guard::config::{CheckConfig, BASE_REF_ENV, EVENT_NAME_ENV};

#[test]
#[serial]
fn test_resolve_reads_ci_environment() {
    std::env::set_var(BASE_REF_ENV, "main");
    std::env::set_var(EVENT_NAME_ENV, "pull_request");

    let config = CheckConfig::resolve(None, None);
    assert_eq!(config.base_ref.as_deref(), Some("main"));
    assert_eq!(config.event_name.as_deref(), Some("pull_request"));
    assert_eq!(config.comparison_base(), Some("main"));

    std::env::remove_var(BASE_REF_ENV);
    std::env::remove_var(EVENT_NAME_ENV);
}

#[test]
#[serial]
fn test_resolve_cli_overrides_environment() {
    std::env::set_var(BASE_REF_ENV, "main");
    std::env::set_var(EVENT_NAME_ENV, "push");

    let config = CheckConfig::resolve(Some("develop".to_string()), None);
    assert_eq!(config.base_ref.as_deref(), Some("develop"));
    // Explicit CLI ref requests a comparison even outside pull_request events
    assert_eq!(config.comparison_base(), Some("develop"));

    std::env::remove_var(BASE_REF_ENV);
    std::env::remove_var(EVENT_NAME_ENV);
}

#[test]
#[serial]
fn test_resolve_with_clean_environment() {
    std::env::remove_var(BASE_REF_ENV);
    std::env::remove_var(EVENT_NAME_ENV);

    let config = CheckConfig::resolve(None, None);
    assert_eq!(config.base_ref, None);
    assert_eq!(config.comparison_base(), None);
}
