//! Error types for sentence loading and NLP operations

use std::path::PathBuf;
use thiserror::Error;

use crate::provider::Capability;

/// Error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input file content is not a list literal of strings
    #[error("Invalid file format: {0}")]
    Format(String),

    /// The resolved provider cannot perform the requested operation
    #[error("{capability} is not available with the current backend.\n{remediation}")]
    CapabilityUnavailable {
        /// Capability that was requested
        capability: Capability,
        /// Instruction telling the operator how to enable it
        remediation: String,
    },

    /// File could not be read or written
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
