//! Parser error types for godb-parser.

use std::path::PathBuf;

/// Errors that abort parsing. Malformed content is never an error.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Failed to open ontology file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}
