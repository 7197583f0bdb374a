//! Periodization: phase classification and benchmark tiers.

pub mod benchmark;
pub mod phase;

pub use benchmark::{
    classify_benchmark_time, classify_for_gender, expected_improvement, Gender, TimeTrialResult,
};
pub use phase::{classify_phase, default_time_trial_weeks, Phase};
