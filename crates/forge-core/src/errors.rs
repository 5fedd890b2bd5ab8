//! Cross-cutting error types for Storeforge.
//!
//! Domain-specific errors (e.g., `DataError`, `DialogueError`) are defined in
//! their respective crates. A unified error is deferred to `forge-cli` where
//! all crate errors converge through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Storeforge crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
