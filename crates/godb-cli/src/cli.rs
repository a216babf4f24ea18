use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `godb` binary.
#[derive(Debug, Parser)]
#[command(
    name = "godb",
    version,
    about = "Load a Gene Ontology OBO file into a SQLite store with transitive closure tables"
)]
pub struct Cli {
    /// Ontology file to read (OBO 1.2 stanza format)
    pub input: PathBuf,

    /// Store to write; replaced if it exists
    pub output: PathBuf,
}
