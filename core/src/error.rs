//! Error types for index construction and session operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while building or querying a corpus.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid document root or unreadable stop-word list. Fatal at startup.
    #[error("configuration error: {reason}: {}", path.display())]
    Config { path: PathBuf, reason: String },

    /// A single document could not be read.
    #[error("cannot read document {}: {source}", path.display())]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A result position outside the current result set.
    #[error("result position {position} does not exist ({len} current results)")]
    IndexOutOfRange { position: isize, len: usize },

    /// A result position argument that is not an integer.
    #[error("not a result position: {0:?}")]
    MalformedPosition(String),
}
