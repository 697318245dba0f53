//! AIML entity validator
//!
//! Checks AIML entity documents against a fixed Meta-AIML taxonomy and grades
//! them instead of returning a bare pass/fail: every problem becomes a
//! categorized finding, and the findings plus field coverage become a quality
//! score and a completeness percentage. Capability modules declared by an
//! entity can be resolved, closed over their dependencies and checked for
//! conflicts through a pluggable `SchemaSource`.
//!
//! ```
//! use aiml_validator::Validator;
//!
//! let result = Validator::default().validate_str(r#"{"entityType": "hotel"}"#);
//! assert!(!result.is_valid);
//! assert!(result.score <= 100);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{ModuleReport, ModuleService, Validator};
pub use config::Config;
pub use domain::entities::{
    Entity, EntityInfo, Finding, FindingCategory, ModuleRecord, ModuleReference, Severity,
    ValidationResult,
};
pub use domain::ports::{SchemaSource, SchemaSourceError};
pub use domain::services::{ModuleResolver, RuleEngine, ScoringEngine};
pub use domain::value_objects::{Taxonomy, TaxonomyVersion};
pub use error::{AimlError, AimlResult};
pub use infrastructure::{DirectorySchemaSource, InMemorySchemaSource};
