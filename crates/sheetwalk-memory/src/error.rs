//! Memory host error types

use thiserror::Error;

/// Result type for memory host operations
pub type MemoryResult<T> = std::result::Result<T, MemoryError>;

/// Errors that can occur while building or loading a memory host
#[derive(Debug, Error)]
pub enum MemoryError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON fixture error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A workbook already holds a sheet with this name
    #[error("Workbook '{workbook}' already has a sheet named '{sheet}'")]
    DuplicateSheet { workbook: String, sheet: String },

    /// Handle does not belong to this host
    #[error("Unknown handle: {0}")]
    UnknownHandle(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetwalk_core::Error),
}

impl From<MemoryError> for sheetwalk_core::Error {
    fn from(err: MemoryError) -> Self {
        match err {
            MemoryError::Core(e) => e,
            other => sheetwalk_core::Error::host(other.to_string()),
        }
    }
}
