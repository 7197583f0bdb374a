//! Preference weighting for candidate sessions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::catalog::{SessionTemplate, TemplateId};

/// Template preferences taken from a user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPreferences {
    /// Favorite templates
    pub favorites: BTreeSet<TemplateId>,
    /// Preferred templates (weighted like favorites, not annotated)
    pub preferred: BTreeSet<TemplateId>,
    /// Disliked templates (soft exclusion)
    pub disliked: BTreeSet<TemplateId>,
    /// Duplicate favorites once to raise their selection odds
    pub allow_repeating_favorites: bool,
}

impl SessionPreferences {
    /// Whether a template is a favorite.
    pub fn is_favorite(&self, id: TemplateId) -> bool {
        self.favorites.contains(&id)
    }

    /// Whether a template is favorite or preferred.
    pub fn is_prioritized(&self, id: TemplateId) -> bool {
        self.favorites.contains(&id) || self.preferred.contains(&id)
    }
}

/// Reorder candidates favorites-first, dropping dislikes where possible.
///
/// Disliked templates are removed unless that leaves fewer than `needed`
/// candidates, in which case they are appended as a last resort. With
/// `allow_repeating_favorites` each favorite appears twice. The order only
/// biases a later shuffle-and-truncate; it is not a final ordering.
pub fn prioritize<'a>(
    sessions: &[&'a SessionTemplate],
    preferences: &SessionPreferences,
    needed: usize,
) -> Vec<&'a SessionTemplate> {
    let (disliked, kept): (Vec<&SessionTemplate>, Vec<&SessionTemplate>) = sessions
        .iter()
        .copied()
        .partition(|t| preferences.disliked.contains(&t.id));

    let (prioritized, regular): (Vec<&SessionTemplate>, Vec<&SessionTemplate>) = kept
        .into_iter()
        .partition(|t| preferences.is_prioritized(t.id));

    let mut result = Vec::with_capacity(sessions.len() + prioritized.len());
    result.extend(prioritized.iter().copied());
    if preferences.allow_repeating_favorites {
        result.extend(
            prioritized
                .iter()
                .copied()
                .filter(|t| preferences.is_favorite(t.id)),
        );
    }
    result.extend(regular);

    if result.len() < needed && !disliked.is_empty() {
        tracing::debug!(
            candidates = result.len(),
            needed,
            restored = disliked.len(),
            "Restoring disliked templates to fill the pool"
        );
        result.extend(disliked);
    }

    result
}
