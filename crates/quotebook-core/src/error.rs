//! Error types for quote operations

use crate::storage::db::DatabaseError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors that can occur while working with the quote list
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Text or category missing on add
    #[error("Please fill both fields")]
    MissingField,

    /// Filter matched nothing
    #[error("No quotes available for this category.")]
    NoQuotes { filter: String },

    /// Import content was not a JSON array of quotes
    #[error("Failed to import quotes. Make sure it's valid JSON.")]
    InvalidImport(String),

    /// Storage failure
    #[error("Storage error: {0}")]
    Storage(#[from] DatabaseError),

    /// File I/O error
    #[error("I/O error for {path}: {message}")]
    IoError { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Get the error code for CLI output
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField => "VALIDATION_ERROR",
            Self::NoQuotes { .. } => "NO_QUOTES",
            Self::InvalidImport(_) => "INVALID_IMPORT",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::IoError { .. } => "IO_ERROR",
            Self::Json(_) => "PARSE_ERROR",
        }
    }

    pub(crate) fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::IoError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}
