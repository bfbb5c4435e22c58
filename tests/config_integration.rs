//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use hyperwire::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HW_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HW_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_numeric() {
    std::env::set_var("HW_VIEW__FOCAL_LENGTH", "750");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.view.focal_length, 750.0);
    std::env::remove_var("HW_VIEW__FOCAL_LENGTH");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("HW_WINDOW__TITLE");
    std::env::remove_var("HW_VIEW__FOCAL_LENGTH");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    // Skip when a local override is present
    if cwd.join("config/user.toml").exists() {
        return;
    }

    let loaded = AppConfig::load().unwrap();
    let builtin = AppConfig::default();
    assert_eq!(
        toml::to_string(&loaded).unwrap(),
        toml::to_string(&builtin).unwrap()
    );
    assert!(loaded.validate().is_ok());
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = std::env::temp_dir().join(format!("hyperwire-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("default.toml"),
        "[solid]\norigin = [0.0, 0.0, 0.0]\nedge_length = 100.0\n",
    )
    .unwrap();
    std::fs::write(dir.join("user.toml"), "[solid]\nedge_length = 250.0\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.solid.origin, vec![0.0, 0.0, 0.0]);
    assert_eq!(config.solid.edge_length, 250.0);
    assert_eq!(config.window.width, 400);

    std::fs::remove_dir_all(&dir).unwrap();
}
