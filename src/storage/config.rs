//! Engine configuration.
//!
//! Loaded from TOML in the application data directory. Every field has a
//! default so a missing file or a partial file is valid.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::periodization::default_time_trial_weeks;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Macrocycle settings
    pub program: ProgramSettings,
    /// Day assignment settings
    pub schedule: ScheduleSettings,
    /// Feedback adaptation settings
    pub adaptation: AdaptationSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            program: ProgramSettings::default(),
            schedule: ScheduleSettings::default(),
            adaptation: AdaptationSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.program.weeks == 0 {
            return Err(ConfigError::Invalid("program.weeks must be at least 1".into()));
        }
        if self.schedule.consecutive_day_ceiling == 0 {
            return Err(ConfigError::Invalid(
                "schedule.consecutive_day_ceiling must be at least 1".into(),
            ));
        }
        if let Some(weeks) = &self.program.time_trial_weeks {
            if let Some(week) = weeks
                .iter()
                .find(|w| **w == 0 || **w > self.program.weeks)
            {
                return Err(ConfigError::Invalid(format!(
                    "time-trial week {} is outside 1..={}",
                    week, self.program.weeks
                )));
            }
        }
        if self.adaptation.fatigue_window == 0 {
            return Err(ConfigError::Invalid(
                "adaptation.fatigue_window must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Macrocycle settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramSettings {
    /// Number of weeks in the macrocycle
    pub weeks: u32,
    /// Explicit time-trial weeks; `None` uses week 1, every fourth week and the final week
    pub time_trial_weeks: Option<BTreeSet<u32>>,
    /// Seed for reproducible generation
    pub seed: Option<u64>,
}

impl Default for ProgramSettings {
    fn default() -> Self {
        Self {
            weeks: 12,
            time_trial_weeks: None,
            seed: None,
        }
    }
}

impl ProgramSettings {
    /// Time-trial weeks for a program of `weeks` weeks.
    pub fn time_trial_weeks_for(&self, weeks: u32) -> BTreeSet<u32> {
        match &self.time_trial_weeks {
            Some(explicit) => explicit.iter().copied().filter(|w| *w <= weeks).collect(),
            None => default_time_trial_weeks(weeks),
        }
    }
}

/// How a forced recovery day chooses between rest and active recovery
/// when both are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryRotation {
    /// Odd days take active recovery, even days take rest
    #[default]
    Alternate,
    /// Rest only when the day is a multiple of 7, otherwise active recovery
    RestOnSeventh,
}

/// How many templates the weekly pool is sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolSizing {
    /// `days - max(0, (days - 1) / 6) - 1`
    #[default]
    Estimated,
    /// Walk the week once without content and count the training slots
    Simulated,
}

/// How the weekly pool is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStrategy {
    /// Phase-matched templates first, the rest as filler
    #[default]
    PhaseFocused,
    /// Apportion the distribution's training buckets over the pool
    DistributionMixed,
}

/// Day assignment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Maximum consecutive training days before recovery is forced
    pub consecutive_day_ceiling: u32,
    /// Allow full rest days
    pub include_rest_day: bool,
    /// Allow active-recovery days
    pub include_active_recovery: bool,
    /// Rest/active-recovery choice when both are allowed
    pub recovery_rotation: RecoveryRotation,
    /// Weekly pool sizing
    pub pool_sizing: PoolSizing,
    /// Weekly pool population
    pub pool_strategy: PoolStrategy,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            consecutive_day_ceiling: 5,
            include_rest_day: true,
            include_active_recovery: true,
            recovery_rotation: RecoveryRotation::Alternate,
            pool_sizing: PoolSizing::Estimated,
            pool_strategy: PoolStrategy::PhaseFocused,
        }
    }
}

/// Subjective and wearable signal thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalThresholds {
    /// Rate of perceived exertion (0-10)
    pub rpe: u8,
    /// Sleep quality (0-5)
    pub sleep: u8,
    /// Soreness (0-5)
    pub soreness: u8,
    /// Heart rate variability in ms
    pub hrv: f64,
}

/// Intensity and volume multipliers applied together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierPair {
    /// Distance/intensity multiplier
    pub intensity: f64,
    /// Repetition/volume multiplier
    pub volume: f64,
}

/// Feedback adaptation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptationSettings {
    /// Number of recent RPE values averaged into the fatigue score
    pub fatigue_window: usize,
    /// Fatigue score at or above which pull back is forced
    pub high_fatigue_score: f64,
    /// Values used when a feedback field is absent
    pub defaults: SignalThresholds,
    /// Pull back when RPE >= rpe, sleep <= sleep, soreness >= soreness or HRV < hrv
    pub pull_back_when: SignalThresholds,
    /// Push forward when RPE <= rpe, sleep >= sleep, soreness <= soreness and HRV > hrv
    pub push_forward_when: SignalThresholds,
    /// Multipliers applied on pull back
    pub pull_back: MultiplierPair,
    /// Multipliers applied on push forward
    pub push_forward: MultiplierPair,
}

impl Default for AdaptationSettings {
    fn default() -> Self {
        Self {
            fatigue_window: 3,
            high_fatigue_score: 0.8,
            defaults: SignalThresholds {
                rpe: 5,
                sleep: 3,
                soreness: 2,
                hrv: 7.0,
            },
            pull_back_when: SignalThresholds {
                rpe: 8,
                sleep: 2,
                soreness: 4,
                hrv: 6.0,
            },
            push_forward_when: SignalThresholds {
                rpe: 4,
                sleep: 4,
                soreness: 2,
                hrv: 8.0,
            },
            pull_back: MultiplierPair {
                intensity: 0.8,
                volume: 0.7,
            },
            push_forward: MultiplierPair {
                intensity: 1.1,
                volume: 1.1,
            },
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "sprintplan", "SprintPlan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default path.
pub fn load_config() -> Result<EngineConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`, returning defaults if it does not exist.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    let data_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(get_data_dir);

    if !path.exists() {
        return Ok(EngineConfig {
            data_dir,
            ..Default::default()
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: EngineConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = data_dir;
    config.validate()?;

    Ok(config)
}

/// Save configuration to the default path.
pub fn save_config(config: &EngineConfig) -> Result<(), ConfigError> {
    save_config_to(config, &get_config_path())
}

/// Save configuration to `path`.
pub fn save_config_to(config: &EngineConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
