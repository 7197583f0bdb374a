//! SprintPlan - Adaptive Sprint Program Generation
//!
//! Turns an athlete profile, feedback history and a catalog of sprint
//! session templates into a week-by-week, day-by-day training calendar.
//! Covers phase periodization, rest and recovery constraints, benchmark
//! placement and preference weighting. Generation is a pure in-memory
//! computation; randomness comes from a caller-supplied RNG.

pub mod adaptation;
pub mod catalog;
pub mod periodization;
pub mod planning;
pub mod profile;
pub mod schedule;
pub mod storage;

// Re-export commonly used types
pub use adaptation::{FeedbackEntry, Modifiers, WearableSample};
pub use catalog::{Archetype, Catalog, Level, SessionTemplate};
pub use periodization::Phase;
pub use profile::UserProfile;
pub use schedule::{DayAssignment, MacrocycleDriver, ProgramSchedule, ScheduleError, WeekSchedule};
pub use storage::config::EngineConfig;
