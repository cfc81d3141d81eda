//! Tests for config file loading.

use crate::config::loader::{load_config_from, ConfigError, ConfigFile};
use crate::config::EngineConfig;
use std::path::PathBuf;
use std::time::Duration;

fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("heapviz-loader-{}-{label}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn empty_file_yields_defaults() {
    let file: ConfigFile = toml::from_str("").expect("empty TOML parses");
    assert_eq!(file.into_config(), EngineConfig::default());
}

#[test]
fn fields_override_their_defaults_independently() {
    let file: ConfigFile = toml::from_str("step_delay_ms = 250").expect("parses");
    let config = file.into_config();
    assert_eq!(config.step_delay, Duration::from_millis(250));
    assert_eq!(config.history_depth, None);
}

#[test]
fn all_fields_parse() {
    let file: ConfigFile = toml::from_str(
        r#"
step_delay_ms = 0
history_depth = 64
log_file = "/tmp/heapviz.log"
"#,
    )
    .expect("parses");
    let config = file.into_config();
    assert_eq!(config.step_delay, Duration::ZERO);
    assert_eq!(config.history_depth, Some(64));
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/heapviz.log")));
}

#[test]
fn unknown_settings_are_rejected() {
    let result: Result<ConfigFile, _> = toml::from_str("step_dely_ms = 250");
    assert!(result.is_err());
}

#[test]
fn explicit_missing_file_is_an_error() {
    let path = scratch_dir("missing").join("does-not-exist.toml");
    match load_config_from(&path) {
        Err(ConfigError::Read { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = scratch_dir("malformed");
    let path = dir.join("config.toml");
    std::fs::write(&path, "step_delay_ms = \"soon\"").expect("write config");

    assert!(matches!(
        load_config_from(&path),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn well_formed_file_loads() {
    let dir = scratch_dir("ok");
    let path = dir.join("config.toml");
    std::fs::write(&path, "history_depth = 8").expect("write config");

    let config = load_config_from(&path).expect("loads");
    assert_eq!(config.history_depth, Some(8));
    assert_eq!(config.step_delay, EngineConfig::default().step_delay);
}
