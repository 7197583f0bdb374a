//! Macrocycle driver.
//!
//! Runs phase classification, distribution planning and day assignment
//! for every week. History is indexed by session slot,
//! `(week - 1) * frequency + day_index`, and week `w` only sees slots
//! recorded before it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::engine::{DayAssignmentEngine, WeekContext};
use super::types::{ProgramSchedule, ScheduleError};
use crate::adaptation::{FeedbackAdapter, FeedbackEntry, WearableSample};
use crate::catalog::Catalog;
use crate::periodization::classify_phase;
use crate::planning::plan_distribution;
use crate::profile::UserProfile;
use crate::storage::config::EngineConfig;

/// History slot for a day: `(week - 1) * frequency + day_index`.
pub fn history_index(week: u32, day_index: u32, frequency: u8) -> usize {
    week.saturating_sub(1) as usize * frequency as usize + day_index as usize
}

/// Entries recorded strictly before `week`, oldest first.
pub fn history_before<T>(history: &[T], week: u32, frequency: u8) -> &[T] {
    let end = history_index(week, 0, frequency).min(history.len());
    &history[..end]
}

/// Generates whole programs from a catalog and configuration.
#[derive(Debug, Clone)]
pub struct MacrocycleDriver<'a> {
    catalog: &'a Catalog,
    config: &'a EngineConfig,
    adapter: FeedbackAdapter,
}

impl<'a> MacrocycleDriver<'a> {
    /// Create a driver.
    pub fn new(catalog: &'a Catalog, config: &'a EngineConfig) -> Self {
        Self {
            catalog,
            config,
            adapter: FeedbackAdapter::new(config.adaptation.clone()),
        }
    }

    /// Generate a program of `weeks` weeks.
    ///
    /// `feedback` and `wearable` are oldest first, one entry per completed
    /// session. The profile is only read.
    pub fn generate_program<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        feedback: &[FeedbackEntry],
        wearable: &[WearableSample],
        weeks: u32,
        rng: &mut R,
    ) -> Result<ProgramSchedule, ScheduleError> {
        self.generate(profile, feedback, wearable, weeks, None, rng)
    }

    /// Generate a program with a seeded ChaCha RNG.
    pub fn generate_program_seeded(
        &self,
        profile: &UserProfile,
        feedback: &[FeedbackEntry],
        wearable: &[WearableSample],
        weeks: u32,
        seed: u64,
    ) -> Result<ProgramSchedule, ScheduleError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(profile, feedback, wearable, weeks, Some(seed), &mut rng)
    }

    /// Generate with the configured week count and seed.
    ///
    /// Without a configured seed the thread RNG is used.
    pub fn generate_configured(
        &self,
        profile: &UserProfile,
        feedback: &[FeedbackEntry],
        wearable: &[WearableSample],
    ) -> Result<ProgramSchedule, ScheduleError> {
        let weeks = self.config.program.weeks;
        match self.config.program.seed {
            Some(seed) => self.generate_program_seeded(profile, feedback, wearable, weeks, seed),
            None => self.generate_program(profile, feedback, wearable, weeks, &mut rand::thread_rng()),
        }
    }

    fn generate<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        feedback: &[FeedbackEntry],
        wearable: &[WearableSample],
        weeks: u32,
        seed: Option<u64>,
        rng: &mut R,
    ) -> Result<ProgramSchedule, ScheduleError> {
        let frequency = profile.frequency;
        if !(1..=7).contains(&frequency) {
            return Err(ScheduleError::InvalidFrequency(frequency));
        }
        if weeks == 0 {
            return Err(ScheduleError::InvalidWeeks(weeks));
        }
        self.config.validate()?;
        for entry in feedback {
            entry.validate()?;
        }
        for sample in wearable {
            sample.validate()?;
        }

        let engine = DayAssignmentEngine::new(self.catalog, &self.config.schedule);
        let time_trial_weeks = self.config.program.time_trial_weeks_for(weeks);
        let preferences = profile.preferences();

        let mut schedule = ProgramSchedule {
            level: profile.level,
            frequency,
            seed,
            weeks: Vec::with_capacity(weeks as usize),
        };

        for week in 1..=weeks {
            let phase = classify_phase(week, weeks);
            let distribution = plan_distribution(frequency, profile.level)?;

            let recent_first: Vec<FeedbackEntry> = history_before(feedback, week, frequency)
                .iter()
                .rev()
                .cloned()
                .collect();
            let latest_wearable = history_before(wearable, week, frequency).last();
            let adaptation = self.adapter.assess(&recent_first, latest_wearable);

            let context = WeekContext {
                week,
                days: frequency as u32,
                level: profile.level,
                phase,
                time_trial_week: time_trial_weeks.contains(&week),
                preferences: &preferences,
                overrides: &profile.overrides,
                distribution: &distribution,
                adaptation,
            };

            let week_schedule = engine.assign_week(&context, rng)?;
            tracing::debug!(
                week,
                %phase,
                adjustment = %adaptation.modifiers.adjustment,
                fatigue = adaptation.fatigue,
                gaps = week_schedule.gaps().len(),
                "Generated week"
            );
            schedule.weeks.push(week_schedule);
        }

        tracing::info!(
            level = %profile.level,
            frequency,
            weeks,
            gaps = schedule.gap_count(),
            "Generated program"
        );

        Ok(schedule)
    }
}

/// Generate a program with the default configuration.
pub fn generate_program<R: Rng + ?Sized>(
    catalog: &Catalog,
    profile: &UserProfile,
    feedback: &[FeedbackEntry],
    wearable: &[WearableSample],
    weeks: u32,
    rng: &mut R,
) -> Result<ProgramSchedule, ScheduleError> {
    let config = EngineConfig::default();
    MacrocycleDriver::new(catalog, &config).generate_program(profile, feedback, wearable, weeks, rng)
}
