//! Athlete profile and preferences.

pub mod types;

pub use types::{ManualOverride, ProfileError, UserProfile};
