//! Integration tests for end-to-end program generation.
//!
//! Tests the full macrocycle flow including:
//! - Phase progression across a 12-week program
//! - Benchmark placement on the final day of each week
//! - Consecutive training day ceiling
//! - Overrides, dislikes and feedback-driven adaptation
//! - Seeded repeatability

use std::collections::BTreeSet;

use chrono::Utc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sprintplan::adaptation::{Adjustment, FeedbackEntry};
use sprintplan::schedule::{generate_program, AssignmentSource};
use sprintplan::{
    Archetype, Catalog, EngineConfig, Level, MacrocycleDriver, Phase, ProgramSchedule, UserProfile,
};

fn beginner_program(seed: u64) -> ProgramSchedule {
    let catalog = Catalog::builtin();
    let config = EngineConfig::default();
    let profile = UserProfile::new("Sam", Level::Beginner, 3).unwrap();
    MacrocycleDriver::new(&catalog, &config)
        .generate_program_seeded(&profile, &[], &[], 12, seed)
        .unwrap()
}

#[test]
fn test_beginner_twelve_week_program() {
    let program = beginner_program(42);

    assert_eq!(program.weeks.len(), 12);
    assert_eq!(program.level, Level::Beginner);
    assert_eq!(program.gap_count(), 0);

    for week in &program.weeks {
        assert_eq!(week.len(), 3);
        let days: Vec<u32> = week.days.iter().map(|d| d.day()).collect();
        assert_eq!(days, vec![1, 2, 3]);

        let last = week.final_assignment().unwrap();
        assert_eq!(last.archetype, Archetype::Benchmark, "week {}", week.week);
        assert!(week.longest_training_streak() <= 5);
    }
}

#[test]
fn test_phases_progress_by_block() {
    let program = beginner_program(7);
    let phases: Vec<Phase> = program.weeks.iter().map(|w| w.phase).collect();

    assert_eq!(&phases[0..3], &[Phase::Foundation; 3]);
    assert_eq!(&phases[3..6], &[Phase::Acceleration; 3]);
    assert_eq!(&phases[6..9], &[Phase::MaxVelocity; 3]);
    assert_eq!(&phases[9..12], &[Phase::Peak; 3]);
}

#[test]
fn test_time_trial_weeks_end_in_forty_yard_trial() {
    let program = beginner_program(11);

    for week in [1, 4, 8, 12] {
        let schedule = program.week(week).unwrap();
        assert!(schedule.time_trial_week);

        let last = schedule.final_assignment().unwrap();
        assert_eq!(last.source, AssignmentSource::TimeTrial);
        assert_eq!(last.template_id(), Some(15));
        assert_eq!(
            last.note.as_deref(),
            Some(format!("40-yard time trial - week {} assessment", week).as_str())
        );
    }

    assert!(!program.week(2).unwrap().time_trial_week);
}

#[test]
fn test_templates_match_athlete_level() {
    let program = beginner_program(3);

    for assignment in program.assignments() {
        if let Some(template) = &assignment.template {
            assert!(
                template.level == Level::Beginner || template.level == Level::AllLevels,
                "{} is {}",
                template.name,
                template.level
            );
        }
    }
}

#[test]
fn test_same_seed_same_program() {
    let first = serde_json::to_string(&beginner_program(99)).unwrap();
    let second = serde_json::to_string(&beginner_program(99)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_ceiling_holds_at_every_frequency() {
    let catalog = Catalog::builtin();
    let config = EngineConfig::default();

    for level in Level::athlete_levels() {
        for frequency in 1..=7 {
            let profile = UserProfile::new("Alex", level, frequency).unwrap();
            let program = MacrocycleDriver::new(&catalog, &config)
                .generate_program_seeded(&profile, &[], &[], 8, frequency as u64)
                .unwrap();

            for week in &program.weeks {
                assert_eq!(week.len(), frequency as usize);
                assert!(
                    week.longest_training_streak() <= config.schedule.consecutive_day_ceiling,
                    "{} freq {} week {}",
                    level,
                    frequency,
                    week.week
                );
            }
        }
    }
}

#[test]
fn test_override_is_placed() {
    let catalog = Catalog::builtin();
    let config = EngineConfig::default();
    let mut profile = UserProfile::new("Sam", Level::Beginner, 3).unwrap();
    profile.set_override(2, 1, 5);

    let program = MacrocycleDriver::new(&catalog, &config)
        .generate_program_seeded(&profile, &[], &[], 12, 1)
        .unwrap();

    let first = program.week(2).unwrap().days[0].assignment().unwrap();
    assert_eq!(first.source, AssignmentSource::Override);
    assert_eq!(first.template_id(), Some(5));
}

#[test]
fn test_disliked_template_left_out() {
    let catalog = Catalog::builtin();
    let config = EngineConfig::default();
    let mut profile = UserProfile::new("Sam", Level::Beginner, 3).unwrap();
    profile.dislike(14);

    for seed in 0..10 {
        let program = MacrocycleDriver::new(&catalog, &config)
            .generate_program_seeded(&profile, &[], &[], 12, seed)
            .unwrap();
        assert!(program.assignments().all(|a| a.template_id() != Some(14)));
    }
}

#[test]
fn test_custom_time_trial_weeks() {
    let catalog = Catalog::builtin();
    let mut config = EngineConfig::default();
    config.program.time_trial_weeks = Some(BTreeSet::from([2]));
    let profile = UserProfile::new("Sam", Level::Intermediate, 4).unwrap();

    let program = MacrocycleDriver::new(&catalog, &config)
        .generate_program_seeded(&profile, &[], &[], 4, 8)
        .unwrap();

    let trial_weeks: Vec<u32> = program
        .weeks
        .iter()
        .filter(|w| w.time_trial_week)
        .map(|w| w.week)
        .collect();
    assert_eq!(trial_weeks, vec![2]);
    assert_eq!(
        program.week(2).unwrap().final_assignment().unwrap().template_id(),
        Some(32)
    );
}

#[test]
fn test_hard_feedback_pulls_back_next_week() {
    let catalog = Catalog::builtin();
    let profile = UserProfile::new("Sam", Level::Advanced, 3).unwrap();
    let feedback: Vec<FeedbackEntry> = (0..3)
        .map(|_| FeedbackEntry::new(Utc::now()).with_rpe(9).unwrap())
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let program = generate_program(&catalog, &profile, &feedback, &[], 4, &mut rng).unwrap();

    let first = program.week(1).unwrap();
    assert_eq!(first.adaptation.modifiers.adjustment, Adjustment::Maintain);
    assert_eq!(first.adaptation.fatigue, 0.0);

    let second = program.week(2).unwrap();
    assert_eq!(second.adaptation.modifiers.adjustment, Adjustment::PullBack);
    assert!((second.adaptation.fatigue - 0.9).abs() < 1e-9);
}

#[test]
fn test_generation_leaves_profile_untouched() {
    let catalog = Catalog::builtin();
    let config = EngineConfig::default();
    let profile = UserProfile::new("Sam", Level::Elite, 6).unwrap();
    let before = serde_json::to_string(&profile).unwrap();

    MacrocycleDriver::new(&catalog, &config)
        .generate_program_seeded(&profile, &[], &[], 12, 5)
        .unwrap();

    assert_eq!(serde_json::to_string(&profile).unwrap(), before);
}
