//! Data source errors

use std::path::PathBuf;

/// Errors returned by a [`DataSource`](crate::source::DataSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The backing service could not answer the request.
    #[error("data source unavailable: {0}")]
    Unavailable(String),

    /// The current user may not read log records.
    #[error("access to log records denied")]
    AccessDenied,

    /// Reading a snapshot file failed.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A snapshot could not be parsed into records.
    #[error("failed to parse records: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SourceError {
    /// Creates an unavailable error with a message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}
