//! Dialogue pipeline error types.

use thiserror::Error;

/// Errors raised while synthesizing dialogue or formatting transcripts.
#[derive(Debug, Error)]
pub enum DialogueError {
    /// A participant name has no persona entry.
    #[error("Persona not found: {0}")]
    PersonaNotFound(String),

    /// No meeting template exists for the requested type.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A meeting template file failed to parse.
    #[error("Template parse error in {path}: {source}")]
    TemplateParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A date string was not `YYYY-MM-DD`.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// I/O error reading a template override or writing an artifact.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error on a channel file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
