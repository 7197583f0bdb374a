//! Integration tests for athlete profiles.

use sprintplan::periodization::Gender;
use sprintplan::profile::ProfileError;
use sprintplan::{Level, UserProfile};

#[test]
fn test_onboard_from_benchmark() {
    let profile = UserProfile::from_benchmark("Jordan", 4.8, Gender::Male, 4).unwrap();
    assert_eq!(profile.level, Level::Advanced);
    assert_eq!(profile.personal_best, Some(4.8));

    let profile = UserProfile::from_benchmark("Riley", 6.1, Gender::Female, 3).unwrap();
    assert_eq!(profile.level, Level::Intermediate);
}

#[test]
fn test_invalid_profiles_rejected() {
    assert!(matches!(
        UserProfile::new("A", Level::Beginner, 0),
        Err(ProfileError::InvalidFrequency(0))
    ));
    assert!(matches!(
        UserProfile::new("A", Level::Beginner, 8),
        Err(ProfileError::InvalidFrequency(8))
    ));
    assert!(matches!(
        UserProfile::new("A", Level::AllLevels, 3),
        Err(ProfileError::InvalidLevel)
    ));
    assert!(matches!(
        UserProfile::from_benchmark("A", -1.0, Gender::Male, 3),
        Err(ProfileError::InvalidTime(_))
    ));
}

#[test]
fn test_minimal_toml_profile() {
    let content = r#"
        name = "Casey"
        level = "Intermediate"
        frequency = 5
        gender = "female"
        favorites = [21, 26]

        [[overrides]]
        week = 3
        day = 2
        template_id = 28
    "#;

    let profile: UserProfile = toml::from_str(content).unwrap();
    assert_eq!(profile.frequency, 5);
    assert_eq!(profile.gender, Gender::Female);
    assert!(profile.favorites.contains(&26));
    assert_eq!(profile.override_for(3, 2), Some(28));
    assert_eq!(profile.override_for(3, 1), None);
}

#[test]
fn test_overrides_replace_by_slot() {
    let mut profile = UserProfile::new("Casey", Level::Elite, 6).unwrap();
    profile.set_override(1, 1, 60);
    profile.set_override(1, 1, 61);

    assert_eq!(profile.overrides.len(), 1);
    assert_eq!(profile.override_for(1, 1), Some(61));
    assert!(profile.clear_override(1, 1));
    assert!(!profile.clear_override(1, 1));
}

#[test]
fn test_time_trial_history() {
    let mut profile = UserProfile::from_benchmark("Jordan", 5.2, Gender::Male, 3).unwrap();

    assert!(!profile.record_time_trial(1, 5.3).unwrap());
    assert!(profile.record_time_trial(4, 5.0).unwrap());
    assert_eq!(profile.personal_best, Some(5.0));

    let latest = profile.time_trials.last().unwrap();
    assert_eq!(latest.baseline_seconds, 5.3);
    assert!(latest.improvement_seconds() > 0.0);
}

#[test]
fn test_favorite_toggle() {
    let mut profile = UserProfile::new("Casey", Level::Beginner, 3).unwrap();
    assert!(profile.toggle_favorite(4));
    assert!(profile.preferences().is_favorite(4));
    assert!(!profile.toggle_favorite(4));
    assert!(!profile.preferences().is_favorite(4));
}
