//! Schedule output types and errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::adaptation::{Drill, FeedbackError, WeekAdaptation};
use crate::catalog::{Archetype, Level, SessionTemplate, TemplateId};
use crate::periodization::Phase;
use crate::planning::{MixArchetype, PlanningError};
use crate::storage::config::ConfigError;

/// Which rule placed a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentSource {
    /// User-selected override
    Override,
    /// Forced by the consecutive-day ceiling
    Recovery,
    /// Designated time-trial week
    TimeTrial,
    /// Random end-of-week benchmark
    Benchmark,
    /// Drawn from the weekly pool
    Pool,
}

/// One scheduled day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAssignment {
    /// 1-based week
    pub week: u32,
    /// 1-based day within the week
    pub day: u32,
    /// Chosen template; `None` for a rest day or a missing catalog entry
    pub template: Option<SessionTemplate>,
    /// Resolved archetype
    pub archetype: Archetype,
    /// Free-text note
    pub note: Option<String>,
    /// Rule that placed this session
    pub source: AssignmentSource,
    /// Generated supporting drills, scaled by the week's modifiers
    #[serde(default)]
    pub drills: Vec<Drill>,
}

impl DayAssignment {
    /// Whether this day counts toward the training streak.
    pub fn is_training(&self) -> bool {
        !self.archetype.is_recovery()
    }

    /// Identifier of the chosen template.
    pub fn template_id(&self) -> Option<TemplateId> {
        self.template.as_ref().map(|t| t.id)
    }
}

/// A day slot, either assigned or left open when the pool ran out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScheduledDay {
    /// A session (or rest) was placed
    Assigned(DayAssignment),
    /// No rule could fill the slot; the host decides how to backfill
    Unfilled {
        /// 1-based week
        week: u32,
        /// 1-based day within the week
        day: u32,
    },
}

impl ScheduledDay {
    /// 1-based day number.
    pub fn day(&self) -> u32 {
        match self {
            ScheduledDay::Assigned(assignment) => assignment.day,
            ScheduledDay::Unfilled { day, .. } => *day,
        }
    }

    /// The assignment, if the slot was filled.
    pub fn assignment(&self) -> Option<&DayAssignment> {
        match self {
            ScheduledDay::Assigned(assignment) => Some(assignment),
            ScheduledDay::Unfilled { .. } => None,
        }
    }

    /// Whether the slot is an explicit gap.
    pub fn is_unfilled(&self) -> bool {
        matches!(self, ScheduledDay::Unfilled { .. })
    }
}

/// One week of the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// 1-based week
    pub week: u32,
    /// Training phase
    pub phase: Phase,
    /// Whether the final day is a designated time trial
    pub time_trial_week: bool,
    /// Modifiers and fatigue from history before this week
    pub adaptation: WeekAdaptation,
    /// Rounded target counts from the distribution planner
    pub target_mix: BTreeMap<MixArchetype, u32>,
    /// Days in order, numbered 1..=len
    pub days: Vec<ScheduledDay>,
}

impl WeekSchedule {
    /// Number of day slots.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the week has no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Filled days in order.
    pub fn assignments(&self) -> impl Iterator<Item = &DayAssignment> {
        self.days.iter().filter_map(ScheduledDay::assignment)
    }

    /// Day numbers left unfilled.
    pub fn gaps(&self) -> Vec<u32> {
        self.days
            .iter()
            .filter(|d| d.is_unfilled())
            .map(ScheduledDay::day)
            .collect()
    }

    /// The last day's assignment.
    pub fn final_assignment(&self) -> Option<&DayAssignment> {
        self.days.last().and_then(ScheduledDay::assignment)
    }

    /// Longest run of training days; recovery resets it, gaps do not count.
    pub fn longest_training_streak(&self) -> u32 {
        let mut longest = 0;
        let mut current = 0;
        for assignment in self.assignments() {
            if assignment.is_training() {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        longest
    }
}

/// The full multi-week program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramSchedule {
    /// Athlete level the program was built for
    pub level: Level,
    /// Training days per week
    pub frequency: u8,
    /// Seed used, when generation was seeded
    pub seed: Option<u64>,
    /// Weeks in order
    pub weeks: Vec<WeekSchedule>,
}

impl ProgramSchedule {
    /// Every filled day across the program.
    pub fn assignments(&self) -> impl Iterator<Item = &DayAssignment> {
        self.weeks.iter().flat_map(WeekSchedule::assignments)
    }

    /// Total number of unfilled days.
    pub fn gap_count(&self) -> usize {
        self.weeks.iter().map(|w| w.gaps().len()).sum()
    }

    /// Look up one week.
    pub fn week(&self, week: u32) -> Option<&WeekSchedule> {
        self.weeks.iter().find(|w| w.week == week)
    }
}

/// Scheduling errors.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Training frequency must be between 1 and 7 days per week, got {0}")]
    InvalidFrequency(u8),

    #[error("Program must have at least one week, got {0}")]
    InvalidWeeks(u32),

    #[error("Planning error: {0}")]
    Planning(#[from] PlanningError),

    #[error("Invalid feedback: {0}")]
    Feedback(#[from] FeedbackError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
