//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod schema_source;

pub use schema_source::{EntitySchema, ModuleSchema, SchemaSource, SchemaSourceError};
