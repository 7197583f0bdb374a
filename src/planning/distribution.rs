//! Weekly session-mix distribution.
//!
//! A fixed table keyed by training frequency gives the target share of
//! each [`MixArchetype`] for a week.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::Level;

/// Frequency whose table is used for frequencies above seven.
pub const FALLBACK_FREQUENCY: u8 = 3;

/// Allowed drift of a distribution's total from 1.0.
pub const SHARE_TOLERANCE: f64 = 0.01;

/// Session category used by the distribution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MixArchetype {
    Speed,
    Flying,
    Endurance,
    PyramidUp,
    PyramidDown,
    PyramidUpDown,
    ActiveRecovery,
    Rest,
}

impl MixArchetype {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            MixArchetype::Speed => "Speed",
            MixArchetype::Flying => "Flying",
            MixArchetype::Endurance => "Endurance",
            MixArchetype::PyramidUp => "Pyramid Up",
            MixArchetype::PyramidDown => "Pyramid Down",
            MixArchetype::PyramidUpDown => "Pyramid Up-Down",
            MixArchetype::ActiveRecovery => "Active Recovery",
            MixArchetype::Rest => "Rest",
        }
    }

    /// Whether this bucket is a training session.
    pub fn is_training(&self) -> bool {
        !matches!(self, MixArchetype::ActiveRecovery | MixArchetype::Rest)
    }
}

impl std::fmt::Display for MixArchetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Target fractional mix of archetypes for one week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Frequency the table row was chosen for
    pub frequency: u8,
    /// Share per archetype; absent archetypes have a share of zero
    pub shares: BTreeMap<MixArchetype, f64>,
}

impl Distribution {
    fn from_row(frequency: u8, row: &[(MixArchetype, f64)]) -> Self {
        Self {
            frequency,
            shares: row.iter().copied().collect(),
        }
    }

    /// Share for one archetype.
    pub fn share(&self, archetype: MixArchetype) -> f64 {
        self.shares.get(&archetype).copied().unwrap_or(0.0)
    }

    /// Sum of all shares.
    pub fn total(&self) -> f64 {
        self.shares.values().sum()
    }

    /// Whether the total is within tolerance of 1.0.
    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() <= SHARE_TOLERANCE
    }

    /// Training buckets with a non-zero share.
    pub fn training_archetypes(&self) -> impl Iterator<Item = (MixArchetype, f64)> + '_ {
        self.shares
            .iter()
            .filter(|(archetype, share)| archetype.is_training() && **share > 0.0)
            .map(|(archetype, share)| (*archetype, *share))
    }
}

fn table_row(frequency: u8) -> &'static [(MixArchetype, f64)] {
    use MixArchetype::*;

    match frequency {
        1 => &[(Speed, 1.0)],
        2 => &[(Speed, 0.5), (Endurance, 0.5)],
        4 => &[
            (Speed, 0.30),
            (Flying, 0.20),
            (Endurance, 0.20),
            (PyramidUp, 0.15),
            (PyramidDown, 0.15),
        ],
        5 => &[
            (Speed, 0.25),
            (Flying, 0.20),
            (Endurance, 0.20),
            (PyramidUp, 0.15),
            (PyramidDown, 0.10),
            (PyramidUpDown, 0.10),
        ],
        6 => &[
            (Speed, 0.20),
            (Flying, 0.18),
            (Endurance, 0.17),
            (PyramidUp, 0.15),
            (PyramidDown, 0.10),
            (PyramidUpDown, 0.10),
            (ActiveRecovery, 0.10),
        ],
        7 => &[
            (Speed, 0.18),
            (Flying, 0.16),
            (Endurance, 0.16),
            (PyramidUp, 0.14),
            (PyramidDown, 0.10),
            (PyramidUpDown, 0.10),
            (ActiveRecovery, 0.08),
            (Rest, 0.08),
        ],
        _ => &[
            (Speed, 0.40),
            (Flying, 0.20),
            (Endurance, 0.20),
            (PyramidUp, 0.20),
        ],
    }
}

/// Target archetype shares for a weekly frequency.
///
/// `level` is accepted for future per-level tables and currently does not
/// change the result. Frequencies above seven use the frequency-3 row.
pub fn plan_distribution(frequency: u8, level: Level) -> Result<Distribution, PlanningError> {
    if frequency == 0 {
        return Err(PlanningError::InvalidFrequency(frequency));
    }

    if frequency > 7 {
        tracing::warn!(
            frequency,
            %level,
            "No distribution row for frequency, using the frequency-{} row",
            FALLBACK_FREQUENCY
        );
    }

    Ok(Distribution::from_row(frequency, table_row(frequency)))
}

/// Round each share times `total_days` to the nearest integer independently.
///
/// The counts may not sum to `total_days`; see [`apportion`] for an exact split.
pub fn to_counts(
    distribution: &Distribution,
    total_days: u32,
) -> Result<BTreeMap<MixArchetype, u32>, PlanningError> {
    if total_days == 0 {
        return Err(PlanningError::InvalidTotalDays(total_days));
    }

    Ok(distribution
        .shares
        .iter()
        .map(|(archetype, share)| (*archetype, (share * total_days as f64).round() as u32))
        .collect())
}

/// Split `total` slots across the given shares with the largest-remainder method.
///
/// The result always sums to `total` when at least one share is positive.
/// Ties on the remainder go to the larger share, then to archetype order.
pub fn apportion(
    shares: impl IntoIterator<Item = (MixArchetype, f64)>,
    total: u32,
) -> BTreeMap<MixArchetype, u32> {
    let shares: Vec<(MixArchetype, f64)> = shares.into_iter().filter(|(_, s)| *s > 0.0).collect();
    let sum: f64 = shares.iter().map(|(_, s)| s).sum();
    if shares.is_empty() || total == 0 {
        return shares.into_iter().map(|(a, _)| (a, 0)).collect();
    }

    let mut counts = BTreeMap::new();
    let mut remainders = Vec::with_capacity(shares.len());
    let mut assigned = 0u32;
    for (archetype, share) in &shares {
        let quota = share / sum * total as f64;
        let floor = quota.floor() as u32;
        assigned += floor;
        counts.insert(*archetype, floor);
        remainders.push((*archetype, quota - floor as f64, *share));
    }

    remainders.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| b.2.total_cmp(&a.2))
            .then_with(|| a.0.cmp(&b.0))
    });

    for (archetype, _, _) in remainders.iter().cycle().take(total.saturating_sub(assigned) as usize) {
        if let Some(count) = counts.get_mut(archetype) {
            *count += 1;
        }
    }

    counts
}

/// Planning errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanningError {
    #[error("Training frequency must be at least 1 day per week, got {0}")]
    InvalidFrequency(u8),

    #[error("Total days per week must be positive, got {0}")]
    InvalidTotalDays(u32),
}
