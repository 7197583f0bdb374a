//! Content catalog of sprint session templates.

pub mod library;
pub mod seed;
pub mod types;

pub use library::{Catalog, CatalogError, SearchCriteria};
pub use types::{Archetype, Level, SessionTemplate, TemplateId, UnknownLevel};
