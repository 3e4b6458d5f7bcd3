//! Error types for remote sync

use quotebook_core::QuoteError;
use thiserror::Error;

/// Errors talking to the posts endpoint
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport or decode failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response
    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
}

/// Errors from one sync pass
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    #[error("Local store error: {0}")]
    Local(#[from] QuoteError),
}
