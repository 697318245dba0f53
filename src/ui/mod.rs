//! Terminal and NDJSON output for the `aiml` binary.

pub mod context;
pub mod json;
pub mod terminal;
pub mod text;
pub mod views;
