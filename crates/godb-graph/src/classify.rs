//! Term classification: id filtering, active/obsolete split, namespaces.

use std::collections::HashSet;

use godb_core::entities::Term;
use godb_core::enums::Namespace;
use godb_core::ids::IdPattern;
use godb_parser::{StanzaRecord, normalize_definition};
use tracing::{debug, warn};

/// A term together with the stanza it came from.
#[derive(Debug, Clone)]
pub struct TermRecord {
    pub term: Term,
    pub stanza: StanzaRecord,
}

impl TermRecord {
    fn from_stanza(id: String, stanza: StanzaRecord) -> Self {
        let term = Term {
            name: stanza.name().unwrap_or_default().to_string(),
            namespace: stanza.namespace().and_then(Namespace::from_obo),
            definition: stanza.def().and_then(normalize_definition),
            obsolete: stanza.is_obsolete(),
            id,
        };
        Self { term, stanza }
    }
}

/// Stanzas split by status.
#[derive(Debug, Default)]
pub struct Classification {
    pub active: Vec<TermRecord>,
    pub obsolete: Vec<TermRecord>,
    /// Ids of every active term; the filter for edge parents.
    pub active_ids: HashSet<String>,
    /// Stanzas dropped because their id is missing or foreign.
    pub rejected: usize,
}

impl Classification {
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_ids.contains(id)
    }
}

/// Classify parsed stanzas.
///
/// Stanzas without an id matching `pattern` are silently dropped. Duplicate
/// active ids are kept (the store ignores later copies) and logged.
pub fn classify<I>(stanzas: I, pattern: &IdPattern) -> Classification
where
    I: IntoIterator<Item = StanzaRecord>,
{
    let mut out = Classification::default();

    for stanza in stanzas {
        let Some(id) = stanza.id().filter(|id| pattern.matches(id)) else {
            debug!(id = ?stanza.id(), "skipping stanza without an ontology id");
            out.rejected += 1;
            continue;
        };
        let id = id.to_string();

        if stanza.is_obsolete() {
            out.obsolete.push(TermRecord::from_stanza(id, stanza));
            continue;
        }

        if !out.active_ids.insert(id.clone()) {
            warn!(id = %id, "duplicate term id; the first stanza wins in the store");
        }
        out.active.push(TermRecord::from_stanza(id, stanza));
    }

    out
}
