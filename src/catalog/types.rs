//! Session template types.
//!
//! Templates are authored once, loaded into a [`Catalog`](super::Catalog)
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::periodization::Phase;
use crate::planning::MixArchetype;

/// Stable template identifier.
pub type TemplateId = u32;

/// A prewritten sprint session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTemplate {
    /// Unique identifier, stable across runs
    pub id: TemplateId,
    /// Display name
    pub name: String,
    /// Target distance per rep in yards
    pub distance_yards: u32,
    /// Repetition count
    pub reps: u32,
    /// Rest between reps in minutes
    pub rest_minutes: u32,
    /// Free-text focus tag shown to the athlete
    pub focus: String,
    /// Skill level this template is written for
    pub level: Level,
    /// Session archetype
    pub archetype: Archetype,
    /// Phases this session is suited to
    #[serde(default)]
    pub phase_affinity: BTreeSet<Phase>,
    /// Distribution bucket used by mixed weekly plans
    #[serde(default)]
    pub mix: Option<MixArchetype>,
}

impl SessionTemplate {
    /// Create a new sprint template with no phase or mix tags.
    pub fn new(
        id: TemplateId,
        name: impl Into<String>,
        distance_yards: u32,
        reps: u32,
        rest_minutes: u32,
        level: Level,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            distance_yards,
            reps,
            rest_minutes,
            focus: String::new(),
            level,
            archetype: Archetype::Sprint,
            phase_affinity: BTreeSet::new(),
            mix: None,
        }
    }

    /// Set the focus tag.
    pub fn with_focus(mut self, focus: impl Into<String>) -> Self {
        self.focus = focus.into();
        self
    }

    /// Set the archetype.
    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = archetype;
        self
    }

    /// Set the phases this session suits.
    pub fn with_phases(mut self, phases: &[Phase]) -> Self {
        self.phase_affinity = phases.iter().copied().collect();
        self
    }

    /// Set the distribution bucket.
    pub fn with_mix(mut self, mix: MixArchetype) -> Self {
        self.mix = Some(mix);
        self
    }

    /// Whether this template suits the given phase.
    pub fn suits_phase(&self, phase: Phase) -> bool {
        self.phase_affinity.contains(&phase)
    }

    /// Whether an athlete of `level` may be assigned this template.
    pub fn available_to(&self, level: Level) -> bool {
        self.level == level || self.level == Level::AllLevels
    }

    /// Total sprint volume in yards.
    pub fn volume_yards(&self) -> u32 {
        self.distance_yards.saturating_mul(self.reps)
    }
}

/// Athlete skill level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
    /// Templates usable by every level
    AllLevels,
}

impl Level {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Elite => "Elite",
            Level::AllLevels => "All Levels",
        }
    }

    /// Levels an athlete can hold (excludes `AllLevels`).
    pub fn athlete_levels() -> [Level; 4] {
        [Level::Beginner, Level::Intermediate, Level::Advanced, Level::Elite]
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            "elite" => Ok(Level::Elite),
            "alllevels" | "all" => Ok(Level::AllLevels),
            _ => Err(UnknownLevel(s.to_string())),
        }
    }
}

/// Returned when a level name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {0}")]
pub struct UnknownLevel(pub String);

/// Session archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Sprint,
    ActiveRecovery,
    Rest,
    Benchmark,
    Tempo,
    Comprehensive,
}

impl Archetype {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Archetype::Sprint => "Sprint",
            Archetype::ActiveRecovery => "Active Recovery",
            Archetype::Rest => "Rest",
            Archetype::Benchmark => "Benchmark",
            Archetype::Tempo => "Tempo",
            Archetype::Comprehensive => "Comprehensive",
        }
    }

    /// Rest and active recovery break a training streak.
    pub fn is_recovery(&self) -> bool {
        matches!(self, Archetype::Rest | Archetype::ActiveRecovery)
    }

    /// Archetypes that may be drawn from the weekly pool.
    pub fn is_poolable(&self) -> bool {
        matches!(
            self,
            Archetype::Sprint | Archetype::Tempo | Archetype::Comprehensive
        )
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
