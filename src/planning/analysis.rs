//! Post-generation distribution analysis.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Archetype, Catalog, TemplateId};
use crate::schedule::ProgramSchedule;

/// Summary of how a program used the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionAnalysis {
    /// Scheduled day slots
    pub total_days: usize,
    /// Days counted as training
    pub training_days: usize,
    /// Rest and active-recovery days
    pub recovery_days: usize,
    /// Unfilled days
    pub unfilled_days: usize,
    /// Times each template was scheduled
    pub template_usage: BTreeMap<TemplateId, u32>,
    /// Days per resolved archetype
    pub archetype_counts: BTreeMap<Archetype, u32>,
    /// Templates available to the level
    pub available_templates: usize,
    /// Share of available templates used, in percent
    pub utilization_percent: f64,
    /// Longest training streak in any week
    pub longest_streak: u32,
}

impl DistributionAnalysis {
    /// Distinct templates scheduled.
    pub fn unique_templates(&self) -> usize {
        self.template_usage.len()
    }

    /// Templates scheduled more than once.
    pub fn repeated_templates(&self) -> BTreeSet<TemplateId> {
        self.template_usage
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(id, _)| *id)
            .collect()
    }
}

/// Analyze a generated program against the catalog it came from.
pub fn analyze_distribution(program: &ProgramSchedule, catalog: &Catalog) -> DistributionAnalysis {
    let mut template_usage = BTreeMap::new();
    let mut archetype_counts = BTreeMap::new();
    let mut training_days = 0;
    let mut recovery_days = 0;

    for assignment in program.assignments() {
        *archetype_counts.entry(assignment.archetype).or_insert(0) += 1;
        if assignment.is_training() {
            training_days += 1;
        } else {
            recovery_days += 1;
        }
        if let Some(id) = assignment.template_id() {
            *template_usage.entry(id).or_insert(0) += 1;
        }
    }

    let available_templates = catalog.for_level(program.level).len();
    let utilization_percent = if available_templates == 0 {
        0.0
    } else {
        template_usage.len() as f64 / available_templates as f64 * 100.0
    };

    DistributionAnalysis {
        total_days: program.weeks.iter().map(|w| w.len()).sum(),
        training_days,
        recovery_days,
        unfilled_days: program.gap_count(),
        template_usage,
        archetype_counts,
        available_templates,
        utilization_percent,
        longest_streak: program
            .weeks
            .iter()
            .map(|w| w.longest_training_streak())
            .max()
            .unwrap_or(0),
    }
}
