//! Unit tests for the template catalog.

use sprintplan::catalog::{CatalogError, SearchCriteria};
use sprintplan::{Archetype, Catalog, Level, Phase, SessionTemplate};

#[test]
fn test_builtin_covers_every_level() {
    let catalog = Catalog::builtin();

    for level in Level::athlete_levels() {
        assert!(catalog.time_trial(level).is_some(), "{} has no time trial", level);
        assert!(catalog.active_recovery(level).is_some());
        assert!(catalog.training_pool(level).len() >= 10);
    }
}

#[test]
fn test_time_trial_prefers_exact_level() {
    let catalog = Catalog::builtin();

    for level in Level::athlete_levels() {
        let trial = catalog.time_trial(level).unwrap();
        assert_eq!(trial.level, level);
        assert_eq!(trial.distance_yards, 40);
        assert_eq!(trial.archetype, Archetype::Benchmark);
    }
}

#[test]
fn test_level_filter_includes_all_levels() {
    let catalog = Catalog::builtin();
    let beginner = catalog.for_level(Level::Beginner);

    assert!(beginner
        .iter()
        .all(|t| t.level == Level::Beginner || t.level == Level::AllLevels));
    assert!(beginner.iter().any(|t| t.level == Level::AllLevels));
}

#[test]
fn test_training_pool_excludes_recovery_and_benchmarks() {
    let catalog = Catalog::builtin();

    for template in catalog.training_pool(Level::Elite) {
        assert!(template.archetype.is_poolable());
        assert!(!template.archetype.is_recovery());
    }
}

#[test]
fn test_no_builtin_rest_template() {
    assert!(Catalog::builtin().rest(Level::Advanced).is_none());
}

#[test]
fn test_search_by_phase_and_distance() {
    let catalog = Catalog::builtin();
    let criteria = SearchCriteria {
        level: Some(Level::Intermediate),
        phase: Some(Phase::Peak),
        max_distance_yards: Some(60),
        ..Default::default()
    };

    let results = catalog.search(&criteria);
    assert!(!results.is_empty());
    for template in results {
        assert!(template.available_to(Level::Intermediate));
        assert!(template.suits_phase(Phase::Peak));
        assert!(template.distance_yards <= 60);
    }
}

#[test]
fn test_duplicate_ids_rejected() {
    let result = Catalog::new(vec![
        SessionTemplate::new(1, "A", 10, 4, 1, Level::Beginner),
        SessionTemplate::new(1, "B", 20, 4, 1, Level::Beginner),
    ]);
    assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
}

#[test]
fn test_json_catalog() {
    let content = r#"[
        {
            "id": 500,
            "name": "Flying 20 yd",
            "distance_yards": 20,
            "reps": 5,
            "rest_minutes": 3,
            "focus": "Max Velocity",
            "level": "Advanced",
            "archetype": "sprint",
            "phase_affinity": ["max_velocity"],
            "mix": "flying"
        }
    ]"#;

    let catalog = Catalog::from_json_str(content).unwrap();
    let template = catalog.get(500).unwrap();
    assert!(template.suits_phase(Phase::MaxVelocity));
    assert!(catalog.require(501).is_err());
}

#[test]
fn test_malformed_catalog_is_parse_error() {
    let result = Catalog::from_toml_str("[[template]]\nid = \"not a number\"");
    assert!(matches!(result, Err(CatalogError::ParseError(_))));
}
