//! Namespace and synonym-scope enums.
//!
//! Both enums carry the exact strings used in the output store via
//! `as_str()`, mirroring how they are written to SQL.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage label for a term whose namespace is missing or unrecognized.
pub const UNKNOWN_NAMESPACE_LABEL: &str = "??";

// ---------------------------------------------------------------------------
// Namespace
// ---------------------------------------------------------------------------

/// One of the three ontology partitions.
///
/// Terms outside these three are still stored, but never contribute edges
/// or closure pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Namespace {
    BiologicalProcess,
    MolecularFunction,
    CellularComponent,
}

impl Namespace {
    /// All partitions, in the order they are computed and emitted.
    pub const ALL: [Self; 3] = [
        Self::BiologicalProcess,
        Self::MolecularFunction,
        Self::CellularComponent,
    ];

    /// Map the value of a `namespace:` tag to a partition.
    #[must_use]
    pub fn from_obo(value: &str) -> Option<Self> {
        match value {
            "biological_process" => Some(Self::BiologicalProcess),
            "molecular_function" => Some(Self::MolecularFunction),
            "cellular_component" => Some(Self::CellularComponent),
            _ => None,
        }
    }

    /// Short label stored in the `ontology` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BiologicalProcess => "BP",
            Self::MolecularFunction => "MF",
            Self::CellularComponent => "CC",
        }
    }

    /// Human-readable name stored in the `go_ontology.term_type` column.
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::BiologicalProcess => "biological process",
            Self::MolecularFunction => "molecular function",
            Self::CellularComponent => "cellular component",
        }
    }

    /// The `namespace:` tag value this partition is parsed from.
    #[must_use]
    pub const fn obo_name(self) -> &'static str {
        match self {
            Self::BiologicalProcess => "biological_process",
            Self::MolecularFunction => "molecular_function",
            Self::CellularComponent => "cellular_component",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// Synonym scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Scope {
    #[default]
    Exact,
    Related,
    Narrow,
    Broad,
}

impl Scope {
    /// Interpret a scope token from a `synonym:` value.
    ///
    /// Anything other than `RELATED`, `NARROW` or `BROAD` (including the
    /// legacy `SYNONYM` token) is treated as `EXACT`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "RELATED" => Self::Related,
            "NARROW" => Self::Narrow,
            "BROAD" => Self::Broad,
            _ => Self::Exact,
        }
    }

    /// Whether `token` is one of the scope keywords a synonym line may carry.
    #[must_use]
    pub fn is_scope_token(token: &str) -> bool {
        matches!(token, "EXACT" | "RELATED" | "NARROW" | "BROAD" | "SYNONYM")
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::Related => "RELATED",
            Self::Narrow => "NARROW",
            Self::Broad => "BROAD",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
