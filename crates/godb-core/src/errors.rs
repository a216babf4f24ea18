//! Cross-cutting error types for godb.
//!
//! Domain-specific errors (`ParserError`, `DatabaseError`, `ConfigError`) live
//! in their own crates and converge into `anyhow` in `godb-cli`.

use thiserror::Error;

/// Errors that can be raised by any godb crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An identifier prefix is not usable for matching term ids.
    #[error("Invalid identifier prefix '{0}': expected one or more ASCII alphanumerics")]
    InvalidIdPrefix(String),
}
