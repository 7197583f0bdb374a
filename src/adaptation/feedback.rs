//! Session feedback and intensity/volume modifiers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::TemplateId;
use crate::storage::config::{AdaptationSettings, MultiplierPair};

/// Subjective feedback recorded after one completed session.
///
/// Fields are optional; absent values read as the configured defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// When the feedback was recorded
    pub recorded_at: DateTime<Utc>,
    /// Template the feedback refers to
    #[serde(default)]
    pub template_id: Option<TemplateId>,
    /// Rate of perceived exertion (0-10)
    #[serde(default)]
    pub rpe: Option<u8>,
    /// Sleep quality (0-5)
    #[serde(default)]
    pub sleep_quality: Option<u8>,
    /// Soreness (0-5)
    #[serde(default)]
    pub soreness: Option<u8>,
    /// Heart rate variability in ms, when a wearable reported it with the session
    #[serde(default)]
    pub hrv: Option<f64>,
    /// Best time achieved in the session, in seconds
    #[serde(default)]
    pub time_achieved: Option<f64>,
}

impl FeedbackEntry {
    /// Create an empty entry.
    pub fn new(recorded_at: DateTime<Utc>) -> Self {
        Self {
            recorded_at,
            template_id: None,
            rpe: None,
            sleep_quality: None,
            soreness: None,
            hrv: None,
            time_achieved: None,
        }
    }

    /// Set the template this feedback refers to.
    pub fn for_template(mut self, template_id: TemplateId) -> Self {
        self.template_id = Some(template_id);
        self
    }

    /// Set RPE (0-10).
    pub fn with_rpe(mut self, rpe: u8) -> Result<Self, FeedbackError> {
        check_range("rpe", rpe, 0, 10)?;
        self.rpe = Some(rpe);
        Ok(self)
    }

    /// Set sleep quality (0-5).
    pub fn with_sleep(mut self, sleep: u8) -> Result<Self, FeedbackError> {
        check_range("sleep_quality", sleep, 0, 5)?;
        self.sleep_quality = Some(sleep);
        Ok(self)
    }

    /// Set soreness (0-5).
    pub fn with_soreness(mut self, soreness: u8) -> Result<Self, FeedbackError> {
        check_range("soreness", soreness, 0, 5)?;
        self.soreness = Some(soreness);
        Ok(self)
    }

    /// Set HRV in ms.
    pub fn with_hrv(mut self, hrv: f64) -> Result<Self, FeedbackError> {
        check_positive("hrv", hrv)?;
        self.hrv = Some(hrv);
        Ok(self)
    }

    /// Set the time achieved in seconds.
    pub fn with_time(mut self, seconds: f64) -> Result<Self, FeedbackError> {
        check_positive("time_achieved", seconds)?;
        self.time_achieved = Some(seconds);
        Ok(self)
    }

    /// Re-check every field, for entries that bypassed the builder.
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if let Some(rpe) = self.rpe {
            check_range("rpe", rpe, 0, 10)?;
        }
        if let Some(sleep) = self.sleep_quality {
            check_range("sleep_quality", sleep, 0, 5)?;
        }
        if let Some(soreness) = self.soreness {
            check_range("soreness", soreness, 0, 5)?;
        }
        if let Some(hrv) = self.hrv {
            check_positive("hrv", hrv)?;
        }
        if let Some(time) = self.time_achieved {
            check_positive("time_achieved", time)?;
        }
        Ok(())
    }
}

/// A wearable reading taken between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WearableSample {
    /// When the sample was taken
    pub recorded_at: DateTime<Utc>,
    /// Heart rate variability in ms
    #[serde(default)]
    pub hrv: Option<f64>,
    /// Resting heart rate in bpm
    #[serde(default)]
    pub resting_hr: Option<u8>,
}

impl WearableSample {
    /// Create a sample with an HRV reading.
    pub fn with_hrv(recorded_at: DateTime<Utc>, hrv: f64) -> Result<Self, FeedbackError> {
        check_positive("hrv", hrv)?;
        Ok(Self {
            recorded_at,
            hrv: Some(hrv),
            resting_hr: None,
        })
    }

    /// Re-check every field.
    pub fn validate(&self) -> Result<(), FeedbackError> {
        if let Some(hrv) = self.hrv {
            check_positive("hrv", hrv)?;
        }
        Ok(())
    }
}

fn check_range(field: &'static str, value: u8, min: u8, max: u8) -> Result<(), FeedbackError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(FeedbackError::OutOfRange {
            field,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        })
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), FeedbackError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FeedbackError::NotPositive { field, value })
    }
}

/// Intensity and volume multipliers for generated prescriptions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Scales target distance
    pub intensity: f64,
    /// Scales repetition count
    pub volume: f64,
    /// Which rule produced these values
    pub adjustment: Adjustment,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::neutral()
    }
}

impl Modifiers {
    /// (1.0, 1.0).
    pub fn neutral() -> Self {
        Self {
            intensity: 1.0,
            volume: 1.0,
            adjustment: Adjustment::Maintain,
        }
    }

    fn from_pair(pair: MultiplierPair, adjustment: Adjustment) -> Self {
        Self {
            intensity: pair.intensity,
            volume: pair.volume,
            adjustment,
        }
    }

    /// Scale a repetition count, truncating and keeping at least one rep.
    pub fn scale_reps(&self, reps: u32) -> u32 {
        ((reps as f64 * self.volume) as u32).max(1)
    }

    /// Scale a distance in yards, truncating.
    pub fn scale_distance(&self, yards: u32) -> u32 {
        (yards as f64 * self.intensity) as u32
    }
}

/// Direction of a feedback adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    /// Reduce load
    PullBack,
    /// Keep load
    #[default]
    Maintain,
    /// Increase load
    PushForward,
}

impl Adjustment {
    /// Get display name.
    pub fn label(&self) -> &'static str {
        match self {
            Adjustment::PullBack => "Pull back",
            Adjustment::Maintain => "Maintain",
            Adjustment::PushForward => "Push forward",
        }
    }
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Compute modifiers with the default thresholds.
pub fn compute_modifiers(
    latest_feedback: Option<&FeedbackEntry>,
    latest_wearable: Option<&WearableSample>,
) -> Modifiers {
    compute_modifiers_with(&AdaptationSettings::default(), latest_feedback, latest_wearable)
}

/// Compute modifiers from the latest feedback and wearable reading.
///
/// HRV is taken from the wearable sample, then from the feedback entry,
/// then from the defaults.
pub fn compute_modifiers_with(
    settings: &AdaptationSettings,
    latest_feedback: Option<&FeedbackEntry>,
    latest_wearable: Option<&WearableSample>,
) -> Modifiers {
    let defaults = settings.defaults;
    let rpe = latest_feedback.and_then(|f| f.rpe).unwrap_or(defaults.rpe);
    let sleep = latest_feedback
        .and_then(|f| f.sleep_quality)
        .unwrap_or(defaults.sleep);
    let soreness = latest_feedback
        .and_then(|f| f.soreness)
        .unwrap_or(defaults.soreness);
    let hrv = latest_wearable
        .and_then(|w| w.hrv)
        .or_else(|| latest_feedback.and_then(|f| f.hrv))
        .unwrap_or(defaults.hrv);

    let pull = settings.pull_back_when;
    let push = settings.push_forward_when;

    if rpe >= pull.rpe || sleep <= pull.sleep || soreness >= pull.soreness || hrv < pull.hrv {
        Modifiers::from_pair(settings.pull_back, Adjustment::PullBack)
    } else if rpe <= push.rpe && sleep >= push.sleep && soreness <= push.soreness && hrv > push.hrv
    {
        Modifiers::from_pair(settings.push_forward, Adjustment::PushForward)
    } else {
        Modifiers::neutral()
    }
}

/// Feedback validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeedbackError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}
