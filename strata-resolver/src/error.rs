//! Error types for the resolution engine.

use thiserror::Error;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur during standard-values resolution.
///
/// Collaborator failures propagate unchanged; the engine performs no
/// retries of its own.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// An item or template store call failed.
    #[error("store error: {0}")]
    Store(#[from] strata_model::StoreError),
}
