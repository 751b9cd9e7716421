use inventoria_core::StoreError;
use inventoria_format::CompileError;
use thiserror::Error;

/// Terminal failures of the generation orchestrator.
///
/// Per-attempt collisions (oracle hit or insert constraint violation) are
/// retried inside the orchestrator and never appear here; only budget
/// exhaustion, a malformed format, or a store outage cross the boundary.
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    /// Every attempt in the retry budget produced a taken candidate.
    /// Retryable from the caller's side.
    #[error("could not produce a unique custom id after {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },
    #[error(transparent)]
    Compile(#[from] CompileError),
    /// The store failed for a reason other than a uniqueness conflict.
    #[error("store error: {0}")]
    Store(String),
}

/// Maps non-collision store failures into [`GenerateError::Store`].
///
/// [`StoreError::DuplicateCustomId`] is handled inside the retry loop and
/// must not be routed through here.
pub(crate) fn store_error(err: StoreError) -> GenerateError {
    GenerateError::Store(err.to_string())
}
