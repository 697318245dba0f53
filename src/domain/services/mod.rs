//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! Schema lookups go through the `SchemaSource` port; nothing here touches
//! the file system or network directly.

mod module_resolver;
mod rule_engine;
mod schema_cache;
mod scoring;

pub use module_resolver::{
    module_type_from_ref, CompatibilityReport, DependencyClosure, ModuleConfigError,
    ModuleRecommendations, ModuleResolution, ModuleResolver, FALLBACK_RECOMMENDED_MODULES,
};
pub use rule_engine::{is_http_url, RuleEngine, MIN_DESCRIPTION_CHARS};
pub use schema_cache::SchemaCache;
pub use scoring::{quality_score, Grade, ScoreZone, ScoringEngine};
