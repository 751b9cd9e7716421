//! ID generation orchestration for Inventoria.
//!
//! This crate drives the candidate-generation and uniqueness-conflict retry
//! loop: compile (or fetch a cached) generator for the inventory's format,
//! render a candidate, consult the item namespace, and on collision try
//! again under a bounded budget. The persisted store's unique constraint is
//! the final authority; a constraint violation on insert is folded into the
//! same budget as a pre-insert collision.

pub mod cache;
pub mod error;
pub mod orchestrator;

pub use error::GenerateError;
pub use orchestrator::{Orchestrator, OrchestratorSettings};
