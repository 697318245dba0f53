//! Application Layer
//!
//! Use cases that orchestrate the domain services.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain validation rules (those are in Domain)
//! - Turns unexpected failures into results instead of propagating them
//!
//! ## Use Cases
//!
//! - `Validator` - Rule engine then scoring engine over one entity document
//! - `ModuleService` - Module resolution, dependency closure, conflict checks

pub mod modules;
pub mod validate;

pub use modules::{ModuleReport, ModuleService};
pub use validate::Validator;
