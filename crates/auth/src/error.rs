//! Authentication error types

use std::io;
use thiserror::Error;

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while loading API keys
#[derive(Debug, Error)]
pub enum AuthError {
    /// Failed to read API keys file
    #[error("failed to read API keys file '{path}': {source}")]
    IoError {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Key is too short to be safe
    #[error("API key at line {line} is too short ({length} chars, minimum {minimum})")]
    ShortKey {
        /// Line number (1-based)
        line: usize,
        /// Actual key length
        length: usize,
        /// Required minimum length
        minimum: usize,
    },

    /// Duplicate API key
    #[error("duplicate API key at line {line}")]
    DuplicateKey {
        /// Line number (1-based)
        line: usize,
    },
}

impl AuthError {
    /// Create an IoError
    pub fn io_error(path: impl Into<String>, source: io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}
