//! Application errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by CLI commands and the server.
#[derive(Debug, Error)]
pub enum CliError {
    /// A survey file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A survey file is not valid survey JSON.
    #[error("invalid survey file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured listen address is not a socket address.
    #[error("invalid listen address: {0}")]
    Address(String),

    /// Binding or serving failed.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
