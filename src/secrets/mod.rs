//! Secret handling for diagnostic output.
//!
//! Connection strings embed credentials; anything that logs one goes through
//! [`redact_uri`] first.

pub mod mask;

pub use mask::{redact_uri, PASSWORD_MASK};
