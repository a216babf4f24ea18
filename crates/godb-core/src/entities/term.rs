use crate::enums::{Namespace, UNKNOWN_NAMESPACE_LABEL};

/// An ontology term recovered from a `[Term]` stanza.
///
/// Identifier uniqueness is not enforced here: two stanzas with the same id
/// produce two `Term`s and the store decides which one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: String,
    pub name: String,
    /// `None` when the `namespace:` tag is missing or unrecognized.
    pub namespace: Option<Namespace>,
    pub definition: Option<String>,
    pub obsolete: bool,
}

impl Term {
    /// Short namespace label for storage, `"??"` for unknown namespaces.
    #[must_use]
    pub fn ontology_label(&self) -> &'static str {
        self.namespace.map_or(UNKNOWN_NAMESPACE_LABEL, Namespace::as_str)
    }
}
