use std::path::PathBuf;

use thiserror::Error;

/// Errors raised outside the catalog core: terminal I/O and configuration
///
/// Catalog operations never fail with an error; they report `false` or
/// `None` instead.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be read
    #[error("Failed to read configuration from {path}")]
    ConfigRead {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::config::Config`]
    #[error("Failed to parse configuration in {path}")]
    ConfigParse {
        /// File that was being parsed
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for fallible shell and configuration operations
pub type Result<T> = std::result::Result<T, LibraryError>;
