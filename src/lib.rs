//! envprobe - connectivity and environment diagnostics.
//!
//! Two small tools share this library:
//!
//! - `mongo-probe` connects to the MongoDB deployment named by `MONGO_URI`
//!   and prints each collection's document count and a sample preview
//! - `env-check` confirms the Python packages the service imports can be
//!   located by the interpreter
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing, commands, and logging setup
//! - [`config`] - Environment and `.env` settings
//! - [`error`] - Error types and result aliases
//! - [`mongo`] - Read-only database access
//! - [`packages`] - Python package resolution
//! - [`probe`] - The connectivity report
//! - [`secrets`] - Credential redaction
//! - [`ui`] - Console output
//!
//! # Example
//!
//! ```
//! use envprobe::probe::sample_preview;
//! use mongodb::bson::doc;
//!
//! let preview = sample_preview(&doc! { "_id": 1, "name": "ada" });
//! assert_eq!(preview, r#"{"name": "ada"}"#);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mongo;
pub mod packages;
pub mod probe;
pub mod secrets;
pub mod ui;

pub use error::{ProbeError, Result};
