//! Integration tests for engine configuration persistence.

use std::collections::BTreeSet;

use tempfile::TempDir;

use sprintplan::storage::{
    load_config_from, save_config_to, ConfigError, EngineConfig, PoolSizing, PoolStrategy,
    RecoveryRotation,
};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.program.weeks, 12);
    assert_eq!(config.schedule.consecutive_day_ceiling, 5);
    assert_eq!(config.data_dir, dir.path());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = EngineConfig::default();
    config.program.weeks = 16;
    config.program.seed = Some(1234);
    config.program.time_trial_weeks = Some(BTreeSet::from([1, 8, 16]));
    config.schedule.recovery_rotation = RecoveryRotation::RestOnSeventh;
    config.schedule.pool_sizing = PoolSizing::Simulated;
    config.schedule.pool_strategy = PoolStrategy::DistributionMixed;
    config.adaptation.pull_back.volume = 0.6;

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded.program, config.program);
    assert_eq!(loaded.schedule, config.schedule);
    assert_eq!(loaded.adaptation.pull_back.volume, 0.6);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[schedule]\ninclude_active_recovery = false\n\n[adaptation]\nfatigue_window = 5\n",
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert!(!config.schedule.include_active_recovery);
    assert!(config.schedule.include_rest_day);
    assert_eq!(config.adaptation.fatigue_window, 5);
    assert_eq!(config.program.weeks, 12);
}

#[test]
fn test_invalid_values_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[program]\nweeks = 4\ntime_trial_weeks = [2, 6]\n").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[program\nweeks = ").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}
