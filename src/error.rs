//! Error types for envprobe operations.
//!
//! This module defines [`ProbeError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing connection string is fatal and ends the process with exit 1
//! - Every other variant is a runtime failure that the probe reports and
//!   folds into its boolean result
//! - Use `anyhow::Error` (via `ProbeError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for envprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The connection string was not found in the environment or `.env`.
    #[error("{var} environment variable not set.")]
    MissingConnectionString { var: String },

    /// The connection string does not name a database to select.
    #[error("No default database defined in the connection string")]
    NoDefaultDatabase,

    /// Any failure reported by the MongoDB driver.
    #[error(transparent)]
    Database(#[from] mongodb::error::Error),

    /// The async runtime backing the driver could not be started.
    #[error("Failed to start database runtime: {0}")]
    Runtime(std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Whether this error must terminate the process before any network I/O.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingConnectionString { .. })
    }
}

/// Result type alias for envprobe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
