//! Budget pipeline error types.

use thiserror::Error;

/// Errors raised while building or saving workbook artifacts.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Referenced store type does not exist in `store_types.json`.
    #[error("Unknown store type: {0}")]
    UnknownStoreType(String),

    /// Referenced cost model entry does not exist.
    #[error("Cost model entry not found: {0}")]
    CostModelMissing(String),

    /// JSON serialization of a workbook failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O error writing a workbook document.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
