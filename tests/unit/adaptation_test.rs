//! Unit tests for feedback modifiers, fatigue and preference weighting.

use chrono::Utc;

use sprintplan::adaptation::{
    compute_modifiers, fatigue_score, prescribe, prioritize, Adjustment, DrillKind,
    FeedbackAdapter, FeedbackEntry, FeedbackError, Modifiers, SessionPreferences, WearableSample,
};
use sprintplan::{Level, Phase, SessionTemplate};

fn entry(rpe: u8, sleep: u8, soreness: u8) -> FeedbackEntry {
    FeedbackEntry::new(Utc::now())
        .with_rpe(rpe)
        .and_then(|e| e.with_sleep(sleep))
        .and_then(|e| e.with_soreness(soreness))
        .unwrap()
}

fn template(id: u32) -> SessionTemplate {
    SessionTemplate::new(id, format!("Session {}", id), 20, 6, 2, Level::Beginner)
}

// =============================================================================
// Modifier Tests
// =============================================================================

#[test]
fn test_no_feedback_is_neutral() {
    let modifiers = compute_modifiers(None, None);
    assert_eq!(modifiers, Modifiers::neutral());
}

#[test]
fn test_high_rpe_pulls_back() {
    let modifiers = compute_modifiers(Some(&entry(9, 4, 2)), None);
    assert_eq!(modifiers.adjustment, Adjustment::PullBack);
    assert_eq!(modifiers.intensity, 0.8);
    assert_eq!(modifiers.volume, 0.7);
}

#[test]
fn test_poor_sleep_pulls_back() {
    let modifiers = compute_modifiers(Some(&entry(5, 2, 2)), None);
    assert_eq!(modifiers.adjustment, Adjustment::PullBack);
}

#[test]
fn test_soreness_pulls_back() {
    let modifiers = compute_modifiers(Some(&entry(5, 3, 4)), None);
    assert_eq!(modifiers.adjustment, Adjustment::PullBack);
}

#[test]
fn test_fresh_athlete_pushes_forward() {
    let fb = entry(3, 5, 1).with_hrv(9.0).unwrap();
    let modifiers = compute_modifiers(Some(&fb), None);
    assert_eq!(modifiers.adjustment, Adjustment::PushForward);
    assert_eq!(modifiers.intensity, 1.1);
    assert_eq!(modifiers.volume, 1.1);
}

#[test]
fn test_push_forward_needs_every_signal() {
    // HRV defaults to 7.0, which is not above the push threshold
    let modifiers = compute_modifiers(Some(&entry(3, 5, 1)), None);
    assert_eq!(modifiers.adjustment, Adjustment::Maintain);
}

#[test]
fn test_wearable_hrv_takes_priority() {
    let fb = entry(3, 5, 1).with_hrv(9.0).unwrap();
    let wearable = WearableSample::with_hrv(Utc::now(), 5.0).unwrap();
    let modifiers = compute_modifiers(Some(&fb), Some(&wearable));
    assert_eq!(modifiers.adjustment, Adjustment::PullBack);
}

#[test]
fn test_out_of_range_feedback_rejected() {
    let result = FeedbackEntry::new(Utc::now()).with_rpe(11);
    assert!(matches!(result, Err(FeedbackError::OutOfRange { .. })));

    let result = FeedbackEntry::new(Utc::now()).with_sleep(6);
    assert!(matches!(result, Err(FeedbackError::OutOfRange { .. })));

    let result = FeedbackEntry::new(Utc::now()).with_time(0.0);
    assert!(matches!(result, Err(FeedbackError::NotPositive { .. })));
}

#[test]
fn test_zero_sleep_and_soreness_accepted() {
    let fb = entry(5, 0, 0);
    assert!(fb.validate().is_ok());
    assert_eq!(fb.sleep_quality, Some(0));
    assert_eq!(fb.soreness, Some(0));

    // No sleep reads as poor sleep
    let modifiers = compute_modifiers(Some(&fb), None);
    assert_eq!(modifiers.adjustment, Adjustment::PullBack);
}

#[test]
fn test_scaling_truncates() {
    let modifiers = compute_modifiers(Some(&entry(9, 4, 2)), None);
    assert_eq!(modifiers.scale_reps(6), 4);
    assert_eq!(modifiers.scale_reps(1), 1);
    assert_eq!(modifiers.scale_distance(25), 20);
}

// =============================================================================
// Fatigue Tests
// =============================================================================

#[test]
fn test_fatigue_uses_recent_entries() {
    let history = [entry(9, 4, 2), entry(9, 4, 2), entry(9, 4, 2), entry(1, 4, 2)];
    assert!((fatigue_score(&history) - 0.9).abs() < 1e-9);
}

#[test]
fn test_fatigue_skips_entries_without_rpe() {
    let history = [FeedbackEntry::new(Utc::now()), entry(6, 4, 2)];
    assert!((fatigue_score(&history) - 0.6).abs() < 1e-9);
}

#[test]
fn test_adapter_forces_pull_back_when_fatigued() {
    // Latest entry alone would maintain; the window average is 0.8
    let history = [entry(6, 4, 2), entry(9, 4, 2), entry(9, 4, 2)];
    let adaptation = FeedbackAdapter::default().assess(&history, None);
    assert!(adaptation.fatigue >= 0.8);
    assert_eq!(adaptation.modifiers.adjustment, Adjustment::PullBack);
}

// =============================================================================
// Preference Tests
// =============================================================================

#[test]
fn test_favorites_move_to_front() {
    let templates: Vec<SessionTemplate> = (1..=4).map(template).collect();
    let refs: Vec<&SessionTemplate> = templates.iter().collect();
    let prefs = SessionPreferences {
        favorites: [3].into_iter().collect(),
        ..Default::default()
    };

    let ordered = prioritize(&refs, &prefs, 2);
    assert_eq!(ordered[0].id, 3);
    assert_eq!(ordered.len(), 4);
}

#[test]
fn test_repeating_favorites_duplicates_once() {
    let templates: Vec<SessionTemplate> = (1..=3).map(template).collect();
    let refs: Vec<&SessionTemplate> = templates.iter().collect();
    let prefs = SessionPreferences {
        favorites: [2].into_iter().collect(),
        allow_repeating_favorites: true,
        ..Default::default()
    };

    let ordered = prioritize(&refs, &prefs, 3);
    assert_eq!(ordered.iter().filter(|t| t.id == 2).count(), 2);
    assert_eq!(ordered.len(), 4);
}

#[test]
fn test_dislikes_dropped_unless_needed() {
    let templates: Vec<SessionTemplate> = (1..=3).map(template).collect();
    let refs: Vec<&SessionTemplate> = templates.iter().collect();
    let prefs = SessionPreferences {
        disliked: [1].into_iter().collect(),
        ..Default::default()
    };

    let enough = prioritize(&refs, &prefs, 2);
    assert!(enough.iter().all(|t| t.id != 1));

    let short = prioritize(&refs, &prefs, 3);
    assert_eq!(short.last().map(|t| t.id), Some(1));
}

// =============================================================================
// Prescription Tests
// =============================================================================

#[test]
fn test_pull_back_shrinks_prescription() {
    let neutral = prescribe(Phase::Acceleration, 0, Level::Intermediate, &Modifiers::neutral());
    let reduced = prescribe(
        Phase::Acceleration,
        0,
        Level::Intermediate,
        &compute_modifiers(Some(&entry(9, 4, 2)), None),
    );

    assert_eq!(neutral.len(), reduced.len());
    for (full, light) in neutral.iter().zip(&reduced) {
        assert_eq!(full.kind, light.kind);
        if full.kind != DrillKind::Rest {
            assert!(light.reps <= full.reps);
            assert!(light.distance_yards <= full.distance_yards);
        }
    }
}
