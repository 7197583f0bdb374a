//! Generated supporting drills for training days.
//!
//! Each phase has a four-slot rotation of drills. Base volume depends on
//! level, and the week's [`Modifiers`] scale reps and distances.

use serde::{Deserialize, Serialize};

use super::feedback::Modifiers;
use crate::catalog::Level;
use crate::periodization::Phase;

/// Kind of supporting drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillKind {
    /// Starts and short accelerations
    Starts,
    /// Strength work
    Strength,
    /// Flying sprints
    Flying,
    /// Plyometrics and agility
    Plyometrics,
    /// Full 40-yard sprints
    Sprint40,
    /// Recovery or optional test
    Rest,
}

impl DrillKind {
    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            DrillKind::Starts => "Starts",
            DrillKind::Strength => "Strength",
            DrillKind::Flying => "Flying",
            DrillKind::Plyometrics => "Plyometrics",
            DrillKind::Sprint40 => "40 yd Sprints",
            DrillKind::Rest => "Rest",
        }
    }
}

impl std::fmt::Display for DrillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One scaled drill prescription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    /// Drill kind
    pub kind: DrillKind,
    /// Repetitions (sets for strength work)
    pub reps: u32,
    /// Distance per rep in yards, 0 for non-running work
    pub distance_yards: u32,
    /// Coaching note
    pub notes: String,
}

struct BaseDrill {
    kind: DrillKind,
    reps: u32,
    distance: u32,
    notes: &'static str,
}

const fn base(kind: DrillKind, reps: u32, distance: u32, notes: &'static str) -> BaseDrill {
    BaseDrill {
        kind,
        reps,
        distance,
        notes,
    }
}

fn start_reps(level: Level) -> u32 {
    match level {
        Level::Beginner => 6,
        Level::Advanced | Level::Elite => 10,
        Level::Intermediate | Level::AllLevels => 8,
    }
}

fn base_drills(phase: Phase, slot: u32, level: Level) -> Vec<BaseDrill> {
    use DrillKind::*;

    match (phase, slot % 4) {
        (Phase::Foundation, 0) => vec![base(
            Starts,
            start_reps(level),
            10,
            "Acceleration sprints, 10-20 yd",
        )],
        (Phase::Foundation, 1) => vec![base(
            Strength,
            3,
            0,
            "Lower-body strength: squats, lunges, calf raises",
        )],
        (Phase::Foundation, 2) => vec![base(Flying, 5, 75, "Speed endurance runs at 75%")],
        (Phase::Foundation, _) => vec![base(
            Plyometrics,
            4,
            0,
            "Box jumps, bounding and shuttle agility",
        )],
        (Phase::Acceleration, 0) => vec![
            base(Starts, 4, 20, "Resisted accelerations"),
            base(Sprint40, 4, 40, "Full 40 yd sprints"),
        ],
        (Phase::Acceleration, 1) => vec![base(
            Strength,
            3,
            0,
            "Explosive strength: power cleans, jump squats",
        )],
        (Phase::Acceleration, 2) => vec![base(Starts, 5, 30, "Build-up accelerations")],
        (Phase::Acceleration, _) => vec![base(
            Plyometrics,
            4,
            0,
            "Single-leg bounds and depth jumps",
        )],
        (Phase::MaxVelocity, 0) => vec![base(Sprint40, 4, 40, "Full 40 yd sprints")],
        (Phase::MaxVelocity, 1) => vec![base(
            Strength,
            3,
            0,
            "Explosive strength: hang cleans, jump squats",
        )],
        (Phase::MaxVelocity, 2) => vec![base(Flying, 4, 20, "Flying 20s at full speed")],
        (Phase::MaxVelocity, _) => vec![base(
            Plyometrics,
            4,
            0,
            "Reactive plyometrics and hurdle hops",
        )],
        (Phase::Peak, 0) => vec![base(Sprint40, 4, 40, "Race-pace 40 yd sprints")],
        (Phase::Peak, 1) => vec![base(Starts, 3, 0, "Start technique, no timing")],
        (Phase::Peak, 2) => vec![base(Flying, 3, 20, "Flying 20s at 80-90%")],
        (Phase::Peak, _) => vec![base(Rest, 1, 0, "Rest or optional 40 yd test")],
    }
}

/// Supporting drills for the day at `slot` (0-based) within the week.
pub fn prescribe(phase: Phase, slot: u32, level: Level, modifiers: &Modifiers) -> Vec<Drill> {
    base_drills(phase, slot, level)
        .into_iter()
        .map(|drill| Drill {
            kind: drill.kind,
            reps: if drill.kind == DrillKind::Rest {
                drill.reps
            } else {
                modifiers.scale_reps(drill.reps)
            },
            distance_yards: modifiers.scale_distance(drill.distance),
            notes: drill.notes.to_string(),
        })
        .collect()
}
