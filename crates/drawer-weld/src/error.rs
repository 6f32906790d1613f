//! Error types for drawer-weld

use crate::ir::InterfaceValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for drawer-weld operations
pub type WeldResult<T> = Result<T, WeldError>;

/// Errors that can occur while loading descriptors or writing the interface
#[derive(Debug, Error)]
pub enum WeldError {
    /// IO error on a specific file
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Descriptor document could not be parsed
    #[error("Invalid method descriptors: {0}")]
    Descriptors(#[from] serde_json::Error),

    /// Interface validation error
    #[error("Interface validation error: {0}")]
    Validation(#[from] InterfaceValidationError),

    /// Formatter program is not on PATH
    #[error("Formatter not found: {program}")]
    FormatterNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    /// Formatter could not be started
    #[error("Failed to run formatter {program}: {source}")]
    FormatterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Formatter ran but exited unsuccessfully
    #[error("Formatter {program} failed ({status}): {stderr}")]
    FormatterFailed {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

impl WeldError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WeldError::Io {
            path: path.into(),
            source,
        }
    }
}
