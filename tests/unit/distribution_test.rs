//! Unit tests for weekly distribution planning.

use sprintplan::planning::{
    apportion, plan_distribution, to_counts, MixArchetype, PlanningError, FALLBACK_FREQUENCY,
};
use sprintplan::Level;

// =============================================================================
// Table Lookup Tests
// =============================================================================

#[test]
fn test_every_row_is_normalized() {
    for frequency in 1..=7 {
        let dist = plan_distribution(frequency, Level::Intermediate).unwrap();
        assert!(
            dist.is_normalized(),
            "frequency {} sums to {}",
            frequency,
            dist.total()
        );
    }
}

#[test]
fn test_single_day_is_all_speed() {
    let dist = plan_distribution(1, Level::Beginner).unwrap();
    assert_eq!(dist.share(MixArchetype::Speed), 1.0);
    assert_eq!(dist.shares.len(), 1);
}

#[test]
fn test_level_does_not_change_row() {
    for frequency in 1..=7 {
        let beginner = plan_distribution(frequency, Level::Beginner).unwrap();
        let elite = plan_distribution(frequency, Level::Elite).unwrap();
        assert_eq!(beginner.shares, elite.shares);
    }
}

#[test]
fn test_recovery_buckets_only_at_high_frequency() {
    for frequency in 1..=5 {
        let dist = plan_distribution(frequency, Level::Advanced).unwrap();
        assert_eq!(dist.share(MixArchetype::ActiveRecovery), 0.0);
        assert_eq!(dist.share(MixArchetype::Rest), 0.0);
    }

    let seven = plan_distribution(7, Level::Advanced).unwrap();
    assert!(seven.share(MixArchetype::Rest) > 0.0);
    assert!(seven.training_archetypes().all(|(a, _)| a.is_training()));
}

#[test]
fn test_unmapped_frequency_uses_fallback_row() {
    let fallback = plan_distribution(FALLBACK_FREQUENCY, Level::Beginner).unwrap();
    let wide = plan_distribution(9, Level::Beginner).unwrap();
    assert_eq!(wide.shares, fallback.shares);
    assert_eq!(wide.frequency, 9);
}

#[test]
fn test_zero_frequency_rejected() {
    assert_eq!(
        plan_distribution(0, Level::Beginner),
        Err(PlanningError::InvalidFrequency(0))
    );
}

// =============================================================================
// Count Tests
// =============================================================================

#[test]
fn test_counts_round_independently() {
    let dist = plan_distribution(3, Level::Beginner).unwrap();
    let counts = to_counts(&dist, 5).unwrap();

    assert_eq!(counts[&MixArchetype::Speed], 2);
    assert_eq!(counts[&MixArchetype::Flying], 1);
    assert_eq!(counts[&MixArchetype::Endurance], 1);
    assert_eq!(counts[&MixArchetype::PyramidUp], 1);
}

#[test]
fn test_counts_reject_zero_days() {
    let dist = plan_distribution(3, Level::Beginner).unwrap();
    assert_eq!(to_counts(&dist, 0), Err(PlanningError::InvalidTotalDays(0)));
}

#[test]
fn test_rounded_counts_stay_close_to_total() {
    for frequency in 1..=7 {
        let dist = plan_distribution(frequency, Level::Elite).unwrap();
        for total in 1..=30 {
            let sum: u32 = to_counts(&dist, total).unwrap().values().sum();
            let drift = (sum as i64 - total as i64).abs();
            assert!(
                drift <= dist.shares.len() as i64 / 2 + 1,
                "frequency {} total {} summed to {}",
                frequency,
                total,
                sum
            );
        }
    }
}

#[test]
fn test_apportion_is_exact() {
    for frequency in 1..=7 {
        let dist = plan_distribution(frequency, Level::Elite).unwrap();
        for total in 0..=12 {
            let counts = apportion(dist.training_archetypes(), total);
            assert_eq!(counts.values().sum::<u32>(), total);
        }
    }
}

#[test]
fn test_apportion_favors_largest_share() {
    let dist = plan_distribution(3, Level::Beginner).unwrap();
    let counts = apportion(dist.training_archetypes(), 1);
    assert_eq!(counts[&MixArchetype::Speed], 1);
}
