//! Scenario tests for the AIML validator.
//!
//! Scenarios exercise complete journeys through the public API: an entity
//! document in, a graded result out; module declarations in, a resolved,
//! closed and conflict-checked module set out.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/entity_review.rs"]
mod entity_review;

#[path = "scenarios/module_graph.rs"]
mod module_graph;
