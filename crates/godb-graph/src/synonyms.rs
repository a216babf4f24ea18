//! Synonym extraction for active terms.

use godb_core::entities::Synonym;
use godb_parser::{parse_alt_id, parse_synonym};

use crate::classify::TermRecord;

/// Text synonyms followed by alternate ids, term by term in input order.
///
/// Alternate ids are emitted as-is; they are historical codes and may name
/// terms that no longer exist.
#[must_use]
pub fn collect_synonyms(active: &[TermRecord]) -> Vec<Synonym> {
    let mut out = Vec::new();
    for record in active {
        let term_id = record.term.id.as_str();
        for raw in record.stanza.synonyms() {
            let parsed = parse_synonym(raw);
            out.push(Synonym::text(term_id, parsed.label, parsed.scope));
        }
        for raw in record.stanza.alt_ids() {
            if let Some(alt) = parse_alt_id(raw) {
                out.push(Synonym::alt_id(term_id, alt));
            }
        }
    }
    out
}
