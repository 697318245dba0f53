//! Domain Entities
//!
//! - `Entity` - The document under validation
//! - `Finding` - One reported issue, with severity and category
//! - `ValidationResult` - Findings partitioned by severity plus grades
//! - `ModuleReference` / `ModuleRecord` - Capability modules before and after resolution

mod entity;
mod finding;
mod module;
mod result;

pub use entity::Entity;
pub use finding::{Finding, FindingCategory, FindingCounts, FindingSink, Severity};
pub use module::{ModuleConfiguration, ModuleRecord, ModuleReference, DEFAULT_MODULE_VERSION};
pub use result::{Complexity, EntityInfo, PerformanceMetrics, ValidationResult};
