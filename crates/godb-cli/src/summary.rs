//! Plain-text report printed after a successful load.

use std::fmt::Write;

use crate::pipeline::LoadReport;

/// Render the per-table counts and the output path.
#[must_use]
pub fn render(report: &LoadReport) -> String {
    let mut out = String::new();
    if let Some(version) = &report.data_version {
        let _ = writeln!(out, "Ontology release : {version}");
    }
    for (table, count) in &report.written.tables {
        let _ = writeln!(out, "{table:<17}: {count:>9}");
    }
    let _ = writeln!(out, "go_term rows in store    : {:>9}", report.written.terms);
    let _ = writeln!(out, "go_obsolete rows in store: {:>9}", report.written.obsolete);
    let _ = write!(out, "Database written to: {}", report.output.display());
    out
}
