//! Errors for the table client collaborators

use thiserror::Error;
use yql_diagnostics::ValueError;

use crate::QueryMode;

/// Result type for table client operations
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised by the lazy client, statements and configuration loading
#[derive(Debug, Error)]
pub enum TableError {
    /// Operation on a closed connection
    #[error("connection closed")]
    ClosedConnection,

    /// Prepared statements only run data queries
    #[error("unsupported query mode '{mode}' for execute query on prepared statement")]
    UnsupportedQueryMode { mode: QueryMode },

    /// Failure reported by the underlying client or connection
    #[error("table client error: {message}")]
    Client { message: String },

    /// Options document could not be decoded
    #[error("invalid table options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// Value access or cast failure
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl TableError {
    /// Create a client error
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }
}
