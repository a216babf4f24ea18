//! Load pipeline: read stanzas, build collections, write the staged store.

use std::path::{Path, PathBuf};

use anyhow::Context;
use godb_config::GodbConfig;
use godb_db::{WriteSummary, write_staged};
use godb_graph::{BuildObserver, build_ontology};
use tracing::info;

/// Outcome of one load.
#[derive(Debug)]
pub struct LoadReport {
    pub output: PathBuf,
    pub data_version: Option<String>,
    pub written: WriteSummary,
}

/// Read `input`, build every collection, and write the store to `output`.
pub async fn load(
    input: &Path,
    output: &Path,
    config: &GodbConfig,
    observer: &dyn BuildObserver,
) -> anyhow::Result<LoadReport> {
    let pattern = config.ontology.id_pattern()?;
    if config.ontology.is_custom_prefix() {
        info!(id_prefix = %config.ontology.id_prefix, "accepting terms with non-default prefix");
    }

    let mut stanzas = godb_parser::open(input)?;
    let records = stanzas
        .by_ref()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read '{}'", input.display()))?;
    let lines = stanzas.lines_read();
    let header = stanzas.into_header();
    info!(
        stanzas = records.len(),
        lines,
        format_version = header.format_version().unwrap_or("-"),
        data_version = header.data_version().unwrap_or("-"),
        "parsed ontology"
    );

    let build = build_ontology(records, &pattern, observer);

    let written = write_staged(output, &build, &header, &config.source)
        .await
        .with_context(|| format!("failed to write store '{}'", output.display()))?;

    Ok(LoadReport {
        output: output.to_path_buf(),
        data_version: header.data_version().map(str::to_string),
        written,
    })
}
