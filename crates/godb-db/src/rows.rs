//! Row shaping: typed build output to the column layout of each table.
//!
//! Nothing here touches the database, so the mapping is tested without one.

use godb_config::SourceConfig;
use godb_core::entities::{ClosurePair, Edge, Synonym, Term};
use godb_core::enums::Namespace;
use godb_graph::OntologyBuild;
use godb_parser::OboHeader;

pub const TERM_TABLE: &str = "go_term";
pub const OBSOLETE_TABLE: &str = "go_obsolete";
pub const SYNONYM_TABLE: &str = "go_synonym";

/// `map_name` used for the provenance row in `map_metadata`.
pub const MAP_NAME: &str = "GO";

/// Direct-edge table of a namespace partition.
#[must_use]
pub const fn parents_table(namespace: Namespace) -> &'static str {
    match namespace {
        Namespace::BiologicalProcess => "go_bp_parents",
        Namespace::MolecularFunction => "go_mf_parents",
        Namespace::CellularComponent => "go_cc_parents",
    }
}

/// Closure table of a namespace partition.
#[must_use]
pub const fn offspring_table(namespace: Namespace) -> &'static str {
    match namespace {
        Namespace::BiologicalProcess => "go_bp_offspring",
        Namespace::MolecularFunction => "go_mf_offspring",
        Namespace::CellularComponent => "go_cc_offspring",
    }
}

/// `go_term` / `go_obsolete` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermRow<'a> {
    pub go_id: &'a str,
    pub term: &'a str,
    pub ontology: &'static str,
    pub definition: Option<&'a str>,
}

impl<'a> From<&'a Term> for TermRow<'a> {
    fn from(term: &'a Term) -> Self {
        Self {
            go_id: &term.id,
            term: &term.name,
            ontology: term.ontology_label(),
            definition: term.definition.as_deref(),
        }
    }
}

/// `go_synonym` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynonymRow<'a> {
    pub go_id: &'a str,
    pub synonym: &'a str,
    pub secondary: Option<&'a str>,
    pub scope: &'static str,
    pub like_go_id: i64,
}

impl<'a> From<&'a Synonym> for SynonymRow<'a> {
    fn from(syn: &'a Synonym) -> Self {
        Self {
            go_id: &syn.term_id,
            synonym: &syn.label,
            secondary: syn.secondary.as_deref(),
            scope: syn.scope.as_str(),
            like_go_id: i64::from(syn.is_identifier),
        }
    }
}

/// `go_{bp,mf,cc}_parents` row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentRow<'a> {
    pub go_id: &'a str,
    pub parent_id: &'a str,
    pub relationship_type: &'a str,
}

impl<'a> From<&'a Edge> for ParentRow<'a> {
    fn from(edge: &'a Edge) -> Self {
        Self {
            go_id: &edge.child,
            parent_id: &edge.parent,
            relationship_type: &edge.relationship,
        }
    }
}

/// `go_{bp,mf,cc}_offspring` row: `go_id` is the ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffspringRow<'a> {
    pub go_id: &'a str,
    pub offspring_id: &'a str,
}

impl<'a> From<&'a ClosurePair> for OffspringRow<'a> {
    fn from(pair: &'a ClosurePair) -> Self {
        Self {
            go_id: &pair.ancestor,
            offspring_id: &pair.descendant,
        }
    }
}

/// `go_ontology` rows: short label and long name of each namespace.
#[must_use]
pub fn ontology_rows() -> Vec<(&'static str, &'static str)> {
    Namespace::ALL
        .iter()
        .map(|ns| (ns.as_str(), ns.long_name()))
        .collect()
}

/// `map_counts` rows, one per populated table, as built (before dedup).
#[must_use]
pub fn count_rows(build: &OntologyBuild) -> Vec<(&'static str, usize)> {
    let mut counts = vec![
        (TERM_TABLE, build.active.len()),
        (OBSOLETE_TABLE, build.obsolete.len()),
        (SYNONYM_TABLE, build.synonyms.len()),
    ];
    for partition in &build.partitions {
        counts.push((parents_table(partition.namespace), partition.edges.len()));
        counts.push((offspring_table(partition.namespace), partition.closure.len()));
    }
    counts
}

/// `metadata` rows: every header tag, then the loader version and build time.
#[must_use]
pub fn metadata_rows(header: &OboHeader, built_at: &str) -> Vec<(String, String)> {
    header
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .chain([
            (
                "godb_version".to_string(),
                env!("CARGO_PKG_VERSION").to_string(),
            ),
            ("built_at".to_string(), built_at.to_string()),
        ])
        .collect()
}

/// `map_metadata` row describing where the ontology came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapMetadataRow<'a> {
    pub map_name: &'static str,
    pub source_name: &'a str,
    pub source_url: &'a str,
    pub source_date: &'a str,
}

impl<'a> MapMetadataRow<'a> {
    /// Source date is the header's `data-version`, else `date`, else empty.
    #[must_use]
    pub fn new(source: &'a SourceConfig, header: &'a OboHeader) -> Self {
        Self {
            map_name: MAP_NAME,
            source_name: &source.name,
            source_url: &source.url,
            source_date: header
                .data_version()
                .or_else(|| header.date())
                .unwrap_or_default(),
        }
    }
}
