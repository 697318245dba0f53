//! SchemaSource adapters
//!
//! - `InMemorySchemaSource` - schemas registered up front (tests, embedding)
//! - `DirectorySchemaSource` - an offline mirror of the schema host on disk

mod directory;
mod memory;

pub use directory::DirectorySchemaSource;
pub use memory::InMemorySchemaSource;
