//! Interpretation of individual tag values.
//!
//! Every function here takes a value that the stanza scanner already
//! stripped of trailing comments and surrounding whitespace.

use godb_core::enums::Scope;

use crate::quoted::split_quoted;

/// A `synonym:` value broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSynonym {
    pub label: String,
    pub scope: Scope,
    pub xrefs: Vec<String>,
}

/// Normalize a `def:` value into plain definition text.
///
/// `"Text." [GOC:ai, PMID:1]` becomes `Text.`. A value that does not start
/// with a closed quoted string falls back to stripping a trailing
/// `"` + `[...]` citation and one surrounding quote on each side. Returns
/// `None` when nothing is left.
#[must_use]
pub fn normalize_definition(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let text = match split_quoted(raw) {
        Some((text, rest)) if is_citation_or_empty(rest) => text,
        _ => fallback_definition(raw),
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn is_citation_or_empty(rest: &str) -> bool {
    let rest = rest.trim();
    rest.is_empty() || (rest.starts_with('[') && rest.ends_with(']'))
}

fn fallback_definition(raw: &str) -> String {
    let (body, had_citation) = match strip_citation(raw) {
        Some(body) => (body, true),
        None => (raw, false),
    };
    let body = body.strip_prefix('"').unwrap_or(body);
    let body = if had_citation {
        body
    } else {
        body.strip_suffix('"').unwrap_or(body)
    };
    body.to_string()
}

/// `..."  [xrefs]` at the end of the value: return everything before the
/// closing quote.
fn strip_citation(raw: &str) -> Option<&str> {
    let trimmed = raw.trim_end();
    if !trimmed.ends_with(']') {
        return None;
    }
    let open = trimmed.rfind('[')?;
    trimmed[..open].trim_end().strip_suffix('"')
}

/// Parse a `synonym:` value shaped as `"<label>" <SCOPE>? <type>? [<xrefs>]?`.
///
/// An unrecognized or missing scope is `EXACT`. A value that does not start
/// with a closed quoted label becomes the label as a whole, scope `EXACT`.
#[must_use]
pub fn parse_synonym(raw: &str) -> ParsedSynonym {
    let fallback = || ParsedSynonym {
        label: raw.to_string(),
        scope: Scope::Exact,
        xrefs: Vec::new(),
    };

    let Some((label, rest)) = split_quoted(raw) else {
        return fallback();
    };
    if !(rest.is_empty() || rest.starts_with(char::is_whitespace)) {
        return fallback();
    }

    let (words, xref_list) = match rest.find('[') {
        Some(open) => (&rest[..open], Some(&rest[open + 1..])),
        None => (rest, None),
    };

    // A first word that is not a scope keyword is the synonym type.
    let scope = words
        .split_whitespace()
        .next()
        .filter(|word| Scope::is_scope_token(word))
        .map_or(Scope::Exact, Scope::from_token);

    let xrefs = xref_list
        .and_then(|list| list.split(']').next())
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|x| !x.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    ParsedSynonym {
        label,
        scope,
        xrefs,
    }
}

/// Parent identifier of an `is_a:` value: its first whitespace-delimited token.
#[must_use]
pub fn parse_is_a(raw: &str) -> Option<&str> {
    raw.split_whitespace().next()
}

/// `(relationship type, parent id)` from a `relationship:` value.
///
/// Values with fewer than two tokens are malformed and yield `None`.
#[must_use]
pub fn parse_relationship(raw: &str) -> Option<(&str, &str)> {
    let mut tokens = raw.split_whitespace();
    let relationship = tokens.next()?;
    let parent = tokens.next()?;
    Some((relationship, parent))
}

/// The alternate identifier named by an `alt_id:` value.
#[must_use]
pub fn parse_alt_id(raw: &str) -> Option<&str> {
    raw.split_whitespace().next()
}
