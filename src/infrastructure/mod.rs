//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. This layer handles all I/O.
//!
//! - `schema_source/` - SchemaSource implementations (in-memory, directory mirror)

pub mod schema_source;

pub use schema_source::{DirectorySchemaSource, InMemorySchemaSource};
