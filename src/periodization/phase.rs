//! Macrocycle phases and time-trial placement.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A macrocycle sub-period with a training emphasis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Foundation,
    Acceleration,
    MaxVelocity,
    Peak,
}

impl Phase {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Foundation => "Foundation",
            Phase::Acceleration => "Acceleration",
            Phase::MaxVelocity => "Max Velocity",
            Phase::Peak => "Peak",
        }
    }

    /// All phases in macrocycle order.
    pub fn all() -> [Phase; 4] {
        [
            Phase::Foundation,
            Phase::Acceleration,
            Phase::MaxVelocity,
            Phase::Peak,
        ]
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Map a 1-based week to its phase.
///
/// The macrocycle is split into four equal blocks, so a 12-week cycle
/// gives weeks 1-3 Foundation, 4-6 Acceleration, 7-9 Max Velocity and
/// 10-12 Peak. Weeks outside `1..=total_weeks` fall back to Foundation.
pub fn classify_phase(week: u32, total_weeks: u32) -> Phase {
    if week == 0 || total_weeks == 0 || week > total_weeks {
        return Phase::Foundation;
    }

    let phases = Phase::all();
    let block = ((week - 1) as u64 * phases.len() as u64 / total_weeks as u64) as usize;
    phases.get(block).copied().unwrap_or_default()
}

/// Default time-trial weeks: week 1, every fourth week, and the final week.
pub fn default_time_trial_weeks(total_weeks: u32) -> BTreeSet<u32> {
    let mut weeks: BTreeSet<u32> = (4..=total_weeks).step_by(4).collect();
    if total_weeks > 0 {
        weeks.insert(1);
        weeks.insert(total_weeks);
    }
    weeks
}
