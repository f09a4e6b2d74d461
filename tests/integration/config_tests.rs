//! Integration tests for config loading through the ConfigPort.

use fuzzytherm::adapters::config_file::JsonConfigFile;
use fuzzytherm::app::ports::ConfigPort;
use fuzzytherm::app::service::ControlLoop;
use fuzzytherm::error::ConfigError;

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("fuzzytherm-{}-{}.json", name, std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loaded_config_builds_a_loop() {
    let path = write_temp("ok", r#"{ "target_temperature_c": 24.0, "tick_interval_ms": 2000 }"#);
    let config = JsonConfigFile::new(&path).load();
    std::fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    let lp = ControlLoop::new(&config).unwrap();
    assert_eq!(lp.target(), 24.0);
    assert_eq!(lp.tick_interval().as_millis(), 2000);
}

#[test]
fn invalid_file_is_rejected_before_the_loop_sees_it() {
    let path = write_temp("bad", r#"{ "heater_gain_c_per_min": -1.0 }"#);
    let result = JsonConfigFile::new(&path).load();
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
}

#[test]
fn truncated_file_is_corrupted() {
    let path = write_temp("trunc", r#"{ "target_temperature_c": "#);
    let result = JsonConfigFile::new(&path).load();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(result, Err(ConfigError::Corrupted));
}
