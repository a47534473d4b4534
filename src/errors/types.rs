//! Error type definitions for playlist ingestion
//!
//! The parser is total and has no error type of its own; everything that
//! can fail lives on the retrieval path.

use thiserror::Error;

/// Failure to retrieve a playlist document.
///
/// An empty channel list is a valid retrieval outcome, distinct from every
/// variant here. Errors propagate directly to the caller; there is no retry
/// and no partial-success variant.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// The supplied playlist address is not a valid URL
    #[error("failed to fetch playlist: invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The server answered with a non-success status
    #[error("failed to fetch playlist: HTTP status {status}")]
    HttpStatus { status: u16 },

    /// Transport-level failure (DNS, connection refused, timeout, malformed
    /// response), wrapping the underlying cause
    #[error("failed to fetch playlist: {0}")]
    Transport(#[from] reqwest::Error),
}

impl RetrievalError {
    /// Create an error for a non-success response status.
    pub fn http_status(status: reqwest::StatusCode) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
        }
    }
}
