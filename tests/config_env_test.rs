//! `AdminConfig::from_env` with the process environment.
//!
//! Every test here touches shared environment variables, so they run
//! serially.

use std::time::Duration;

use abd_admin::config::{
    AdminConfig, ENV_ADMIN_KEY, ENV_ADMIN_LOGIN, ENV_API_ROOT, ENV_DATA_DIR, ENV_LOG,
    ENV_PAGE_SIZE, ENV_TIMEOUT_SECS,
};
use serial_test::serial;

const ALL_VARS: &[&str] = &[
    ENV_API_ROOT,
    ENV_ADMIN_LOGIN,
    ENV_ADMIN_KEY,
    ENV_TIMEOUT_SECS,
    ENV_PAGE_SIZE,
    ENV_LOG,
    ENV_DATA_DIR,
];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_unset_environment_gives_defaults() {
    clear_env();
    let config = AdminConfig::from_env().unwrap();
    assert_eq!(config, AdminConfig::default());
    assert!(config.default_credentials().is_none());
}

#[test]
#[serial]
fn test_every_variable_is_applied() {
    clear_env();
    std::env::set_var(ENV_API_ROOT, "http://localhost:8000/");
    std::env::set_var(ENV_ADMIN_LOGIN, "admin");
    std::env::set_var(ENV_ADMIN_KEY, "abcd-1234");
    std::env::set_var(ENV_TIMEOUT_SECS, "5");
    std::env::set_var(ENV_PAGE_SIZE, "25");
    std::env::set_var(ENV_LOG, "abd_admin=debug");
    std::env::set_var(ENV_DATA_DIR, "/tmp/abd-admin-test");

    let config = AdminConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.admin_base(), "http://localhost:8000/admin");
    assert_eq!(config.auth_check_url(), "http://localhost:8000/test-admin-auth");
    assert_eq!(config.request_timeout, Duration::from_secs(5));
    assert_eq!(config.page_size, Some(25));
    assert_eq!(config.log_filter, "abd_admin=debug");
    assert_eq!(config.log_dir(), std::path::PathBuf::from("/tmp/abd-admin-test/logs"));
    let credentials = config.default_credentials().unwrap();
    assert_eq!(credentials.login, "admin");
    assert_eq!(credentials.key, "abcd-1234");
}

#[test]
#[serial]
fn test_half_a_credential_pair_is_ignored() {
    clear_env();
    std::env::set_var(ENV_ADMIN_LOGIN, "admin");
    let config = AdminConfig::from_env().unwrap();
    clear_env();

    assert!(config.login.is_none());
    assert!(config.default_credentials().is_none());
}

#[test]
#[serial]
fn test_blank_values_keep_defaults() {
    clear_env();
    std::env::set_var(ENV_API_ROOT, "   ");
    std::env::set_var(ENV_PAGE_SIZE, "");
    let config = AdminConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_root, AdminConfig::default().api_root);
    assert_eq!(config.page_size, None);
}

#[test]
#[serial]
fn test_malformed_numbers_are_rejected() {
    clear_env();
    std::env::set_var(ENV_TIMEOUT_SECS, "soon");
    let err = AdminConfig::from_env().unwrap_err();
    assert!(err.to_string().contains(ENV_TIMEOUT_SECS));

    clear_env();
    std::env::set_var(ENV_PAGE_SIZE, "0");
    assert!(AdminConfig::from_env().is_err());
    clear_env();
}
