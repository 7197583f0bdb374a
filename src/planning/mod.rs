//! Distribution planning and program analysis.

pub mod analysis;
pub mod distribution;

pub use analysis::{analyze_distribution, DistributionAnalysis};
pub use distribution::{
    apportion, plan_distribution, to_counts, Distribution, MixArchetype, PlanningError,
    FALLBACK_FREQUENCY, SHARE_TOLERANCE,
};
