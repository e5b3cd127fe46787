//! Error types for shark-platform

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Failed to determine home directory")]
    NoHomeDirectory,

    #[error("Failed to resolve path {path:?}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
