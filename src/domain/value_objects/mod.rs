//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
pub mod json;
mod taxonomy;

pub use config_warning::ConfigWarning;
pub use taxonomy::{SubcategoryRule, Taxonomy, TaxonomyVersion};
