//! Database error types for godb-db.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from building the store.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// The output path has no usable parent directory or file name.
    #[error("Invalid output path '{}'", path.display())]
    InvalidPath { path: PathBuf },

    /// Creating, writing, or renaming the staged store failed.
    #[error("Failed to stage '{}': {source}", path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
