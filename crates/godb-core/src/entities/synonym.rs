use crate::enums::Scope;

/// A synonym attached to exactly one term.
///
/// Either a free-text label (`is_identifier == false`, no `secondary`) or an
/// alternate identifier for the same term, in which case the identifier is
/// both the label and the `secondary` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synonym {
    pub term_id: String,
    pub label: String,
    pub secondary: Option<String>,
    pub scope: Scope,
    pub is_identifier: bool,
}

impl Synonym {
    /// A free-text synonym parsed from a `synonym:` tag.
    #[must_use]
    pub fn text(term_id: &str, label: String, scope: Scope) -> Self {
        Self {
            term_id: term_id.to_string(),
            label,
            secondary: None,
            scope,
            is_identifier: false,
        }
    }

    /// A secondary identifier from an `alt_id:` tag.
    ///
    /// The alternate id is not checked against the set of known terms.
    #[must_use]
    pub fn alt_id(term_id: &str, alt_id: &str) -> Self {
        Self {
            term_id: term_id.to_string(),
            label: alt_id.to_string(),
            secondary: Some(alt_id.to_string()),
            scope: Scope::Exact,
            is_identifier: true,
        }
    }
}
