//! Template catalog.
//!
//! An immutable, in-memory collection of [`SessionTemplate`]s passed by
//! reference into every component that needs content.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::seed::builtin_templates;
use super::types::{Archetype, Level, SessionTemplate, TemplateId};
use crate::periodization::Phase;
use crate::planning::MixArchetype;

/// Read-only catalog of session templates.
#[derive(Debug, Clone)]
pub struct Catalog {
    templates: Vec<SessionTemplate>,
    index: HashMap<TemplateId, usize>,
}

/// On-disk catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(rename = "template", alias = "templates", default)]
    templates: Vec<SessionTemplate>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate identifiers.
    pub fn new(templates: Vec<SessionTemplate>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(templates.len());
        for (position, template) in templates.iter().enumerate() {
            if index.insert(template.id, position).is_some() {
                return Err(CatalogError::DuplicateId(template.id));
            }
        }
        Ok(Self { templates, index })
    }

    /// The built-in template set.
    pub fn builtin() -> Self {
        let templates = builtin_templates();
        let index = templates
            .iter()
            .enumerate()
            .map(|(position, template)| (template.id, position))
            .collect();
        Self { templates, index }
    }

    /// Parse a catalog from a TOML document of `[[template]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument =
            toml::from_str(content).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::new(document.templates)
    }

    /// Parse a catalog from a JSON array of templates.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let templates: Vec<SessionTemplate> =
            serde_json::from_str(content).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::new(templates)
    }

    /// Load a catalog file, choosing the format from its extension.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CatalogError::IoError(e.to_string()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over every template in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = &SessionTemplate> {
        self.templates.iter()
    }

    /// Look up a template by identifier.
    pub fn get(&self, id: TemplateId) -> Option<&SessionTemplate> {
        self.index.get(&id).map(|&position| &self.templates[position])
    }

    /// Look up a template, failing on unknown identifiers.
    pub fn require(&self, id: TemplateId) -> Result<&SessionTemplate, CatalogError> {
        self.get(id).ok_or(CatalogError::UnknownId(id))
    }

    /// Templates available to an athlete of `level` (exact level or all levels).
    pub fn for_level(&self, level: Level) -> Vec<&SessionTemplate> {
        self.templates
            .iter()
            .filter(|t| t.available_to(level))
            .collect()
    }

    /// Templates of one archetype available to `level`.
    pub fn by_archetype(&self, level: Level, archetype: Archetype) -> Vec<&SessionTemplate> {
        self.templates
            .iter()
            .filter(|t| t.archetype == archetype && t.available_to(level))
            .collect()
    }

    /// Training templates (sprint, tempo, comprehensive) available to `level`.
    pub fn training_pool(&self, level: Level) -> Vec<&SessionTemplate> {
        self.templates
            .iter()
            .filter(|t| t.archetype.is_poolable() && t.available_to(level))
            .collect()
    }

    /// Benchmark templates available to `level`.
    pub fn benchmarks(&self, level: Level) -> Vec<&SessionTemplate> {
        self.by_archetype(level, Archetype::Benchmark)
    }

    /// The 40-yard time trial for `level`, preferring an exact level match.
    pub fn time_trial(&self, level: Level) -> Option<&SessionTemplate> {
        Self::prefer_exact(self.benchmarks(level), level, |t| t.distance_yards == 40)
    }

    /// The active-recovery template for `level`, preferring an exact level match.
    pub fn active_recovery(&self, level: Level) -> Option<&SessionTemplate> {
        Self::prefer_exact(
            self.by_archetype(level, Archetype::ActiveRecovery),
            level,
            |_| true,
        )
    }

    /// The rest template for `level`, if the catalog authors one.
    pub fn rest(&self, level: Level) -> Option<&SessionTemplate> {
        Self::prefer_exact(self.by_archetype(level, Archetype::Rest), level, |_| true)
    }

    /// Search templates by criteria.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&SessionTemplate> {
        self.templates
            .iter()
            .filter(|t| criteria.matches(t))
            .collect()
    }

    fn prefer_exact<'a>(
        candidates: Vec<&'a SessionTemplate>,
        level: Level,
        accept: impl Fn(&SessionTemplate) -> bool,
    ) -> Option<&'a SessionTemplate> {
        let mut accepted = candidates.into_iter().filter(|t| accept(*t));
        let first = accepted.next()?;
        if first.level == level {
            return Some(first);
        }
        Some(accepted.find(|t| t.level == level).unwrap_or(first))
    }
}

/// Search criteria for templates.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    /// Athlete level (matches exact level and all-levels templates)
    pub level: Option<Level>,
    /// Archetype filter
    pub archetype: Option<Archetype>,
    /// Phase affinity filter
    pub phase: Option<Phase>,
    /// Distribution bucket filter
    pub mix: Option<MixArchetype>,
    /// Maximum rep distance in yards
    pub max_distance_yards: Option<u32>,
}

impl SearchCriteria {
    fn matches(&self, template: &SessionTemplate) -> bool {
        self.level.map_or(true, |level| template.available_to(level))
            && self.archetype.map_or(true, |a| template.archetype == a)
            && self.phase.map_or(true, |p| template.suits_phase(p))
            && self.mix.map_or(true, |m| template.mix == Some(m))
            && self
                .max_distance_yards
                .map_or(true, |max| template.distance_yards <= max)
    }
}

/// Catalog errors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate template id: {0}")]
    DuplicateId(TemplateId),

    #[error("Unknown template id: {0}")]
    UnknownId(TemplateId),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
