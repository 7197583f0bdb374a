//! Preference weighting and feedback-driven adaptation.

pub mod fatigue;
pub mod feedback;
pub mod preferences;
pub mod prescription;

pub use fatigue::{fatigue_score, fatigue_score_window};
pub use feedback::{
    compute_modifiers, compute_modifiers_with, Adjustment, FeedbackEntry, FeedbackError,
    Modifiers, WearableSample,
};
pub use preferences::{prioritize, SessionPreferences};
pub use prescription::{prescribe, Drill, DrillKind};

use crate::storage::config::AdaptationSettings;

/// Adaptation for one week, derived from history recorded before it.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WeekAdaptation {
    /// Intensity/volume modifiers
    pub modifiers: Modifiers,
    /// Fatigue score of the recent history
    pub fatigue: f64,
}

/// Combines the modifier rule with the fatigue estimate.
#[derive(Debug, Clone)]
pub struct FeedbackAdapter {
    settings: AdaptationSettings,
}

impl FeedbackAdapter {
    /// Create an adapter with the given settings.
    pub fn new(settings: AdaptationSettings) -> Self {
        Self { settings }
    }

    /// Adaptation from a most-recent-first feedback history and the latest wearable sample.
    ///
    /// A fatigue score at or above the configured high-fatigue score forces
    /// pull back even when the latest entry alone would not.
    pub fn assess(
        &self,
        recent_first: &[FeedbackEntry],
        latest_wearable: Option<&WearableSample>,
    ) -> WeekAdaptation {
        let fatigue = fatigue_score_window(recent_first, self.settings.fatigue_window);
        let mut modifiers =
            compute_modifiers_with(&self.settings, recent_first.first(), latest_wearable);

        if fatigue >= self.settings.high_fatigue_score && modifiers.adjustment != Adjustment::PullBack
        {
            tracing::debug!(fatigue, "High fatigue, forcing pull back");
            modifiers = Modifiers {
                intensity: self.settings.pull_back.intensity,
                volume: self.settings.pull_back.volume,
                adjustment: Adjustment::PullBack,
            };
        }

        WeekAdaptation { modifiers, fatigue }
    }
}

impl Default for FeedbackAdapter {
    fn default() -> Self {
        Self::new(AdaptationSettings::default())
    }
}
