//! Fatigue estimation from recent RPE.

use super::feedback::FeedbackEntry;

/// Number of recent RPE values averaged by [`fatigue_score`].
pub const DEFAULT_FATIGUE_WINDOW: usize = 3;

/// Normalized fatigue in `[0.0, 1.0]` from a most-recent-first history.
///
/// Averages the last three entries that carry an RPE. No RPE at all reads
/// as no fatigue signal and returns 0.0.
pub fn fatigue_score(recent_first: &[FeedbackEntry]) -> f64 {
    fatigue_score_window(recent_first, DEFAULT_FATIGUE_WINDOW)
}

/// [`fatigue_score`] with a custom window.
pub fn fatigue_score_window(recent_first: &[FeedbackEntry], window: usize) -> f64 {
    let values: Vec<f64> = recent_first
        .iter()
        .filter_map(|entry| entry.rpe)
        .take(window)
        .map(f64::from)
        .collect();

    if values.is_empty() {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean / 10.0).clamp(0.0, 1.0)
}
