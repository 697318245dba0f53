//! Domain Layer
//!
//! The validator core: pure rule evaluation, scoring and module resolution.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Entity, Finding, ValidationResult, ModuleRecord)
//! - `value_objects/` - Immutable value types (Taxonomy, TaxonomyVersion)
//! - `services/` - Domain services (RuleEngine, ScoringEngine, ModuleResolver)
//! - `ports/` - Interface definitions for infrastructure (SchemaSource)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Injected taxonomy** - Rule tables are passed in, never global
//! 3. **Ports & Adapters** - All schema retrieval goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
