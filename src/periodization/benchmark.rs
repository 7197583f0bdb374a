//! Benchmark time classification and time-trial tracking.

use serde::{Deserialize, Serialize};

use crate::catalog::Level;

/// Weekly improvement rate assumed for projected time-trial results.
pub const WEEKLY_IMPROVEMENT_RATE: f64 = 0.015;

/// Gender used to select benchmark thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    /// Not given; classified with the male thresholds
    Unspecified,
}

impl Gender {
    /// Parse a gender label, case-insensitively.
    ///
    /// Unrecognized labels map to [`Gender::Unspecified`].
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }

    /// 40-yard thresholds in seconds as (beginner, intermediate, advanced).
    ///
    /// A time at or above a threshold maps to that (slower) tier.
    pub fn thresholds(&self) -> (f64, f64, f64) {
        match self {
            Gender::Female => (6.5, 5.7, 5.0),
            Gender::Male | Gender::Unspecified => (6.0, 5.0, 4.6),
        }
    }
}

/// Classify a 40-yard time against the thresholds for `gender`.
pub fn classify_benchmark_time(time_seconds: f64, gender: &str) -> Level {
    classify_for_gender(time_seconds, Gender::parse(gender))
}

/// Classify a 40-yard time for a parsed gender.
pub fn classify_for_gender(time_seconds: f64, gender: Gender) -> Level {
    let (beginner, intermediate, advanced) = gender.thresholds();
    if time_seconds >= beginner {
        Level::Beginner
    } else if time_seconds >= intermediate {
        Level::Intermediate
    } else if time_seconds >= advanced {
        Level::Advanced
    } else {
        Level::Elite
    }
}

/// Projected time after `weeks` of training from `baseline`.
pub fn expected_improvement(baseline_seconds: f64, weeks: u32) -> f64 {
    let factor = (1.0 - weeks as f64 * WEEKLY_IMPROVEMENT_RATE).max(0.0);
    baseline_seconds * factor
}

/// A recorded time-trial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTrialResult {
    /// Week the trial was run
    pub week: u32,
    /// Achieved time in seconds
    pub time_seconds: f64,
    /// Baseline time in seconds (first trial or onboarding benchmark)
    pub baseline_seconds: f64,
}

impl TimeTrialResult {
    /// Create a new result.
    pub fn new(week: u32, time_seconds: f64, baseline_seconds: f64) -> Self {
        Self {
            week,
            time_seconds,
            baseline_seconds,
        }
    }

    /// Seconds gained over the baseline (positive is faster).
    pub fn improvement_seconds(&self) -> f64 {
        self.baseline_seconds - self.time_seconds
    }

    /// Improvement over baseline as a percentage.
    pub fn improvement_percent(&self) -> f64 {
        if self.baseline_seconds <= 0.0 {
            return 0.0;
        }
        self.improvement_seconds() / self.baseline_seconds * 100.0
    }

    /// Projected time for this week given the baseline.
    pub fn projected_seconds(&self) -> f64 {
        expected_improvement(self.baseline_seconds, self.week.saturating_sub(1))
    }

    /// Whether the athlete met or beat the projection.
    pub fn on_track(&self) -> bool {
        self.time_seconds <= self.projected_seconds()
    }
}
