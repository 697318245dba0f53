pub mod modules;
pub mod taxonomy;
pub mod validate;
