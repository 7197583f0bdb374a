//! Athlete profile.
//!
//! Owned by the host between generation runs; the engine reads it and
//! never mutates it during a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

use crate::adaptation::SessionPreferences;
use crate::catalog::{Level, TemplateId};
use crate::periodization::{classify_for_gender, Gender, TimeTrialResult};

/// A user-selected template pinned to one (week, day) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualOverride {
    /// 1-based week
    pub week: u32,
    /// 1-based day within the week
    pub day: u32,
    /// Template to place in the slot
    pub template_id: TemplateId,
}

/// Athlete profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Skill level
    pub level: Level,
    /// Training days per week (1-7)
    pub frequency: u8,
    /// Gender used for benchmark classification
    #[serde(default)]
    pub gender: Gender,
    /// Best 40-yard time in seconds
    #[serde(default)]
    pub personal_best: Option<f64>,
    /// Favorite templates
    #[serde(default)]
    pub favorites: BTreeSet<TemplateId>,
    /// Preferred templates
    #[serde(default)]
    pub preferred: BTreeSet<TemplateId>,
    /// Disliked templates
    #[serde(default)]
    pub disliked: BTreeSet<TemplateId>,
    /// Let favorites appear more than once in a week
    #[serde(default)]
    pub allow_repeating_favorites: bool,
    /// Manual per-slot overrides
    #[serde(default)]
    pub overrides: Vec<ManualOverride>,
    /// Completed template identifiers, oldest first
    #[serde(default)]
    pub completed_sessions: Vec<TemplateId>,
    /// Time-trial history
    #[serde(default)]
    pub time_trials: Vec<TimeTrialResult>,
    /// Profile creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile, validating the frequency.
    pub fn new(name: impl Into<String>, level: Level, frequency: u8) -> Result<Self, ProfileError> {
        Self::validate_frequency(frequency)?;
        if level == Level::AllLevels {
            return Err(ProfileError::InvalidLevel);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level,
            frequency,
            gender: Gender::default(),
            personal_best: None,
            favorites: BTreeSet::new(),
            preferred: BTreeSet::new(),
            disliked: BTreeSet::new(),
            allow_repeating_favorites: false,
            overrides: Vec::new(),
            completed_sessions: Vec::new(),
            time_trials: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Onboard from a 40-yard benchmark time.
    pub fn from_benchmark(
        name: impl Into<String>,
        time_seconds: f64,
        gender: Gender,
        frequency: u8,
    ) -> Result<Self, ProfileError> {
        Self::validate_time(time_seconds)?;
        let mut profile = Self::new(name, classify_for_gender(time_seconds, gender), frequency)?;
        profile.gender = gender;
        profile.personal_best = Some(time_seconds);
        Ok(profile)
    }

    /// Validate a frequency (1-7 days per week).
    pub fn validate_frequency(frequency: u8) -> Result<(), ProfileError> {
        if (1..=7).contains(&frequency) {
            Ok(())
        } else {
            Err(ProfileError::InvalidFrequency(frequency))
        }
    }

    fn validate_time(time_seconds: f64) -> Result<(), ProfileError> {
        if time_seconds.is_finite() && time_seconds > 0.0 {
            Ok(())
        } else {
            Err(ProfileError::InvalidTime(time_seconds))
        }
    }

    /// Change the weekly frequency.
    pub fn set_frequency(&mut self, frequency: u8) -> Result<(), ProfileError> {
        Self::validate_frequency(frequency)?;
        self.frequency = frequency;
        self.touch();
        Ok(())
    }

    /// Toggle a favorite; returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: TemplateId) -> bool {
        let now_favorite = if self.favorites.remove(&id) {
            false
        } else {
            self.disliked.remove(&id);
            self.favorites.insert(id)
        };
        self.touch();
        now_favorite
    }

    /// Mark a template as preferred.
    pub fn prefer(&mut self, id: TemplateId) {
        self.disliked.remove(&id);
        self.preferred.insert(id);
        self.touch();
    }

    /// Mark a template as disliked, clearing any favorite or preferred mark.
    pub fn dislike(&mut self, id: TemplateId) {
        self.favorites.remove(&id);
        self.preferred.remove(&id);
        self.disliked.insert(id);
        self.touch();
    }

    /// Pin a template to a slot, replacing any existing override there.
    pub fn set_override(&mut self, week: u32, day: u32, template_id: TemplateId) {
        self.clear_override(week, day);
        self.overrides.push(ManualOverride {
            week,
            day,
            template_id,
        });
        self.touch();
    }

    /// Remove the override for a slot; returns whether one existed.
    pub fn clear_override(&mut self, week: u32, day: u32) -> bool {
        let before = self.overrides.len();
        self.overrides.retain(|o| !(o.week == week && o.day == day));
        self.overrides.len() != before
    }

    /// The override for a slot, if any.
    pub fn override_for(&self, week: u32, day: u32) -> Option<TemplateId> {
        self.overrides
            .iter()
            .find(|o| o.week == week && o.day == day)
            .map(|o| o.template_id)
    }

    /// Record a completed session.
    pub fn record_completion(&mut self, template_id: TemplateId) {
        self.completed_sessions.push(template_id);
        self.touch();
    }

    /// Record a time trial; returns whether it set a new personal best.
    pub fn record_time_trial(&mut self, week: u32, time_seconds: f64) -> Result<bool, ProfileError> {
        Self::validate_time(time_seconds)?;
        let baseline = self
            .time_trials
            .first()
            .map(|t| t.time_seconds)
            .or(self.personal_best)
            .unwrap_or(time_seconds);
        self.time_trials
            .push(TimeTrialResult::new(week, time_seconds, baseline));
        Ok(self.update_personal_best(time_seconds))
    }

    /// Update the personal best if `time_seconds` is faster.
    pub fn update_personal_best(&mut self, time_seconds: f64) -> bool {
        let improved = self.personal_best.map_or(true, |best| time_seconds < best);
        if improved {
            self.personal_best = Some(time_seconds);
            self.touch();
        }
        improved
    }

    /// Preferences view used by the scheduler.
    pub fn preferences(&self) -> SessionPreferences {
        SessionPreferences {
            favorites: self.favorites.clone(),
            preferred: self.preferred.clone(),
            disliked: self.disliked.clone(),
            allow_repeating_favorites: self.allow_repeating_favorites,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Profile errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("Training frequency must be between 1 and 7 days per week, got {0}")]
    InvalidFrequency(u8),

    #[error("An athlete cannot hold the all-levels tier")]
    InvalidLevel,

    #[error("Time must be a positive number of seconds, got {0}")]
    InvalidTime(f64),
}
