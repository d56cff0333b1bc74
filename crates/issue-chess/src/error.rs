//! Controller error types

use std::path::PathBuf;

use chess_core::RulesError;
use thiserror::Error;

/// Every variant is fatal to the invocation.
#[derive(Error, Debug)]
pub enum ControllerError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("Failed to {operation} {}: {source}", .path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ControllerError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ControllerError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
