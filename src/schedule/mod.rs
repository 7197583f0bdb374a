//! Week-by-week scheduling.

pub mod driver;
pub mod engine;
pub mod types;

pub use driver::{generate_program, history_before, history_index, MacrocycleDriver};
pub use engine::{estimate_training_days, DayAssignmentEngine, WeekContext};
pub use types::{
    AssignmentSource, DayAssignment, ProgramSchedule, ScheduleError, ScheduledDay, WeekSchedule,
};
