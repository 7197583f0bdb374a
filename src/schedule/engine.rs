//! Day assignment engine.
//!
//! Walks a week day by day with a consecutive-training-day counter:
//!
//! 1. a manual override for the slot is placed as-is;
//! 2. at the ceiling, a rest or active-recovery day is forced;
//! 3. the last day of a time-trial week takes the level's 40-yard trial;
//! 4. the last day of other weeks takes a random benchmark, if any exist;
//! 5. otherwise the next template is drawn from the weekly pool;
//! 6. if the pool is exhausted the day is left unfilled.
//!
//! Rule 2 also fires one day early when the final day will hold a
//! benchmark, so the benchmark never pushes the streak past the ceiling.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use super::types::{AssignmentSource, DayAssignment, ScheduleError, ScheduledDay, WeekSchedule};
use crate::adaptation::{prescribe, prioritize, Drill, SessionPreferences, WeekAdaptation};
use crate::catalog::{Archetype, Catalog, Level, SessionTemplate};
use crate::periodization::Phase;
use crate::planning::{apportion, to_counts, Distribution};
use crate::profile::ManualOverride;
use crate::storage::config::{PoolSizing, PoolStrategy, RecoveryRotation, ScheduleSettings};

/// Inputs for one week.
#[derive(Debug, Clone)]
pub struct WeekContext<'p> {
    /// 1-based week
    pub week: u32,
    /// Days in the week (the training frequency)
    pub days: u32,
    /// Athlete level
    pub level: Level,
    /// Phase of this week
    pub phase: Phase,
    /// Whether the final day is a designated time trial
    pub time_trial_week: bool,
    /// Athlete preferences
    pub preferences: &'p SessionPreferences,
    /// Manual overrides (any week; filtered by slot)
    pub overrides: &'p [ManualOverride],
    /// Target mix for the week
    pub distribution: &'p Distribution,
    /// Adaptation derived from earlier weeks
    pub adaptation: WeekAdaptation,
}

/// What a slot will hold, decided before content is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SlotPlan<'a> {
    Override(&'a SessionTemplate),
    Recovery(Archetype),
    TimeTrial,
    Benchmark,
    Pool,
}

/// Estimated training days for the weekly pool:
/// `days - max(0, (days - 1) / 6) - 1`.
pub fn estimate_training_days(total_days: u32) -> usize {
    let recovery = total_days.saturating_sub(1) / 6;
    total_days.saturating_sub(recovery).saturating_sub(1) as usize
}

/// Move up to `count` of `indices` into `pool`, phase-matched first.
fn draw<'t, R: Rng + ?Sized>(
    candidates: &[&'t SessionTemplate],
    mut indices: Vec<usize>,
    count: usize,
    phase: Phase,
    used: &mut [bool],
    pool: &mut Vec<&'t SessionTemplate>,
    rng: &mut R,
) {
    indices.shuffle(rng);
    indices.sort_by_key(|&i| !candidates[i].suits_phase(phase));
    for i in indices.into_iter().take(count) {
        used[i] = true;
        pool.push(candidates[i]);
    }
}

/// Places sessions for one week at a time.
#[derive(Debug, Clone, Copy)]
pub struct DayAssignmentEngine<'a> {
    catalog: &'a Catalog,
    settings: &'a ScheduleSettings,
}

impl<'a> DayAssignmentEngine<'a> {
    /// Create an engine over a catalog.
    pub fn new(catalog: &'a Catalog, settings: &'a ScheduleSettings) -> Self {
        Self { catalog, settings }
    }

    /// Build the shuffled weekly pool of `training_days_needed` templates.
    ///
    /// Phase-matched templates come first; if there are too few, the
    /// level's other training templates are added as filler before
    /// preference weighting, shuffling and truncation.
    pub fn select_sessions_for_week<R: Rng + ?Sized>(
        &self,
        level: Level,
        phase: Phase,
        training_days_needed: usize,
        preferences: &SessionPreferences,
        distribution: &Distribution,
        rng: &mut R,
    ) -> Vec<&'a SessionTemplate> {
        if training_days_needed == 0 {
            return Vec::new();
        }

        let pool = match self.settings.pool_strategy {
            PoolStrategy::PhaseFocused => {
                self.phase_focused_pool(level, phase, training_days_needed, preferences, rng)
            }
            PoolStrategy::DistributionMixed => self.mixed_pool(
                level,
                phase,
                training_days_needed,
                preferences,
                distribution,
                rng,
            ),
        };

        tracing::debug!(
            %level,
            %phase,
            needed = training_days_needed,
            selected = pool.len(),
            "Built weekly pool"
        );
        pool
    }

    fn phase_focused_pool<R: Rng + ?Sized>(
        &self,
        level: Level,
        phase: Phase,
        needed: usize,
        preferences: &SessionPreferences,
        rng: &mut R,
    ) -> Vec<&'a SessionTemplate> {
        let (mut filtered, filler): (Vec<&SessionTemplate>, Vec<&SessionTemplate>) = self
            .catalog
            .training_pool(level)
            .into_iter()
            .partition(|t| t.suits_phase(phase));

        if filtered.len() < needed {
            filtered.extend(filler);
        }

        let mut pool = prioritize(&filtered, preferences, needed);
        pool.shuffle(rng);
        pool.truncate(needed);
        pool
    }

    fn mixed_pool<R: Rng + ?Sized>(
        &self,
        level: Level,
        phase: Phase,
        needed: usize,
        preferences: &SessionPreferences,
        distribution: &Distribution,
        rng: &mut R,
    ) -> Vec<&'a SessionTemplate> {
        let candidates = prioritize(&self.catalog.training_pool(level), preferences, needed);
        let counts = apportion(distribution.training_archetypes(), needed as u32);
        let mut used = vec![false; candidates.len()];
        let mut pool = Vec::with_capacity(needed);

        for (mix, count) in counts {
            let bucket: Vec<usize> = (0..candidates.len())
                .filter(|&i| !used[i] && candidates[i].mix == Some(mix))
                .collect();
            draw(&candidates, bucket, count as usize, phase, &mut used, &mut pool, rng);
        }

        let remaining = needed.saturating_sub(pool.len());
        if remaining > 0 {
            let leftovers: Vec<usize> = (0..candidates.len()).filter(|&i| !used[i]).collect();
            draw(&candidates, leftovers, remaining, phase, &mut used, &mut pool, rng);
        }

        pool.shuffle(rng);
        pool
    }

    /// Assign every day of one week.
    pub fn assign_week<R: Rng + ?Sized>(
        &self,
        context: &WeekContext<'_>,
        rng: &mut R,
    ) -> Result<WeekSchedule, ScheduleError> {
        if !(1..=7).contains(&context.days) {
            return Err(ScheduleError::InvalidFrequency(
                context.days.min(u8::MAX as u32) as u8,
            ));
        }

        let needed = match self.settings.pool_sizing {
            PoolSizing::Estimated => estimate_training_days(context.days),
            PoolSizing::Simulated => self
                .plan_slots(context, None)
                .iter()
                .filter(|slot| matches!(slot, Some(SlotPlan::Pool)))
                .count(),
        };

        let pool = self.select_sessions_for_week(
            context.level,
            context.phase,
            needed,
            context.preferences,
            context.distribution,
            rng,
        );
        let mut pool: VecDeque<&SessionTemplate> = pool.into();
        let plan = self.plan_slots(context, Some(pool.len()));

        let mut days = Vec::with_capacity(context.days as usize);
        for (index, slot) in plan.into_iter().enumerate() {
            let day = index as u32 + 1;
            let scheduled = match slot {
                Some(plan) => self.place(context, day, plan, &mut pool, rng),
                None => ScheduledDay::Unfilled {
                    week: context.week,
                    day,
                },
            };

            if let ScheduledDay::Assigned(assignment) = &scheduled {
                tracing::debug!(
                    week = context.week,
                    day,
                    archetype = %assignment.archetype,
                    template = ?assignment.template_id(),
                    "Assigned day"
                );
            } else {
                tracing::debug!(week = context.week, day, "Day left unfilled");
            }
            days.push(scheduled);
        }

        Ok(WeekSchedule {
            week: context.week,
            phase: context.phase,
            time_trial_week: context.time_trial_week,
            adaptation: context.adaptation,
            target_mix: to_counts(context.distribution, context.days)?,
            days,
        })
    }

    /// Walk the week's state machine without choosing content.
    ///
    /// `pool_size` limits rule 5; `None` treats the pool as unlimited.
    /// A `None` slot is a gap.
    fn plan_slots(&self, context: &WeekContext<'_>, pool_size: Option<usize>) -> Vec<Option<SlotPlan<'a>>> {
        let ceiling = self.settings.consecutive_day_ceiling;
        let has_benchmarks = !self.catalog.benchmarks(context.level).is_empty();
        let final_override = self.override_template(context, context.days);
        // An override on the final day decides what it holds.
        let final_reserved = final_override.map_or(context.time_trial_week || has_benchmarks, |t| {
            !t.archetype.is_recovery()
        });

        let mut consecutive = 0u32;
        let mut remaining = pool_size;
        let mut slots = Vec::with_capacity(context.days as usize);

        for day in 1..=context.days {
            let is_last = day == context.days;

            let slot = if let Some(template) = self.override_template(context, day) {
                if template.archetype.is_recovery() {
                    consecutive = 0;
                } else {
                    consecutive += 1;
                    if consecutive > ceiling {
                        tracing::warn!(
                            week = context.week,
                            day,
                            consecutive,
                            ceiling,
                            "Override exceeds the consecutive training day ceiling"
                        );
                    }
                }
                Some(SlotPlan::Override(template))
            } else if consecutive >= ceiling
                || (final_reserved && day + 1 == context.days && consecutive + 1 >= ceiling)
            {
                consecutive = 0;
                Some(SlotPlan::Recovery(self.recovery_archetype(day)))
            } else if context.time_trial_week && is_last {
                consecutive += 1;
                Some(SlotPlan::TimeTrial)
            } else if !context.time_trial_week && is_last && has_benchmarks {
                consecutive += 1;
                Some(SlotPlan::Benchmark)
            } else {
                match remaining {
                    Some(0) => None,
                    Some(left) => {
                        remaining = Some(left - 1);
                        consecutive += 1;
                        Some(SlotPlan::Pool)
                    }
                    None => {
                        consecutive += 1;
                        Some(SlotPlan::Pool)
                    }
                }
            };
            slots.push(slot);
        }

        slots
    }

    /// A usable override for the slot; unknown or wrong-level templates are ignored.
    fn override_template(&self, context: &WeekContext<'_>, day: u32) -> Option<&'a SessionTemplate> {
        let wanted = context
            .overrides
            .iter()
            .find(|o| o.week == context.week && o.day == day)?;

        match self.catalog.get(wanted.template_id) {
            Some(template) if template.available_to(context.level) => Some(template),
            Some(template) => {
                tracing::warn!(
                    week = context.week,
                    day,
                    template = template.id,
                    template_level = %template.level,
                    level = %context.level,
                    "Ignoring override for another level"
                );
                None
            }
            None => {
                tracing::warn!(
                    week = context.week,
                    day,
                    template = wanted.template_id,
                    "Ignoring override for unknown template"
                );
                None
            }
        }
    }

    fn recovery_archetype(&self, day: u32) -> Archetype {
        match (
            self.settings.include_rest_day,
            self.settings.include_active_recovery,
        ) {
            (true, true) => match self.settings.recovery_rotation {
                RecoveryRotation::Alternate if (day - 1) % 2 == 0 => Archetype::ActiveRecovery,
                RecoveryRotation::Alternate => Archetype::Rest,
                RecoveryRotation::RestOnSeventh if day % 7 == 0 => Archetype::Rest,
                RecoveryRotation::RestOnSeventh => Archetype::ActiveRecovery,
            },
            (false, true) => Archetype::ActiveRecovery,
            // The ceiling still holds when neither kind is enabled.
            (true, false) | (false, false) => Archetype::Rest,
        }
    }

    fn place<R: Rng + ?Sized>(
        &self,
        context: &WeekContext<'_>,
        day: u32,
        plan: SlotPlan<'a>,
        pool: &mut VecDeque<&'a SessionTemplate>,
        rng: &mut R,
    ) -> ScheduledDay {
        let assignment = match plan {
            SlotPlan::Override(template) => {
                let mut assignment = self.assignment(
                    context,
                    day,
                    Some(template),
                    template.archetype,
                    AssignmentSource::Override,
                    Some("user-selected override".to_string()),
                );
                assignment.drills = self.drills_for(context, day, template.archetype);
                assignment
            }
            SlotPlan::Recovery(Archetype::ActiveRecovery) => self.assignment(
                context,
                day,
                self.catalog.active_recovery(context.level),
                Archetype::ActiveRecovery,
                AssignmentSource::Recovery,
                Some("Light tempo work for active recovery".to_string()),
            ),
            SlotPlan::Recovery(archetype) => self.assignment(
                context,
                day,
                self.catalog.rest(context.level),
                archetype,
                AssignmentSource::Recovery,
                Some("Complete rest day - no training".to_string()),
            ),
            SlotPlan::TimeTrial => {
                let template = self.catalog.time_trial(context.level).or_else(|| {
                    tracing::warn!(
                        level = %context.level,
                        "No 40-yard time trial for level, using any benchmark"
                    );
                    self.catalog.benchmarks(context.level).first().copied()
                });
                self.assignment(
                    context,
                    day,
                    template,
                    Archetype::Benchmark,
                    AssignmentSource::TimeTrial,
                    Some(format!(
                        "40-yard time trial - week {} assessment",
                        context.week
                    )),
                )
            }
            SlotPlan::Benchmark => {
                let template = self.catalog.benchmarks(context.level).choose(rng).copied();
                let note = template.map(|t| format!("Benchmark: {}", t.name));
                self.assignment(
                    context,
                    day,
                    template,
                    Archetype::Benchmark,
                    AssignmentSource::Benchmark,
                    note,
                )
            }
            SlotPlan::Pool => match pool.pop_front() {
                Some(template) => self.pool_day(context, day, template),
                None => {
                    return ScheduledDay::Unfilled {
                        week: context.week,
                        day,
                    }
                }
            },
        };
        ScheduledDay::Assigned(assignment)
    }

    fn pool_day(
        &self,
        context: &WeekContext<'_>,
        day: u32,
        template: &'a SessionTemplate,
    ) -> DayAssignment {
        let note = context
            .preferences
            .is_favorite(template.id)
            .then(|| "favorite".to_string());
        let mut assignment = self.assignment(
            context,
            day,
            Some(template),
            template.archetype,
            AssignmentSource::Pool,
            note,
        );
        assignment.drills = self.drills_for(context, day, template.archetype);
        assignment
    }

    fn drills_for(
        &self,
        context: &WeekContext<'_>,
        day: u32,
        archetype: Archetype,
    ) -> Vec<Drill> {
        if archetype.is_poolable() {
            prescribe(
                context.phase,
                day - 1,
                context.level,
                &context.adaptation.modifiers,
            )
        } else {
            Vec::new()
        }
    }

    fn assignment(
        &self,
        context: &WeekContext<'_>,
        day: u32,
        template: Option<&SessionTemplate>,
        archetype: Archetype,
        source: AssignmentSource,
        note: Option<String>,
    ) -> DayAssignment {
        DayAssignment {
            week: context.week,
            day,
            template: template.cloned(),
            archetype,
            note,
            source,
            drills: Vec::new(),
        }
    }
}
