//! Ontology identifier pattern.
//!
//! A term id is a namespaced code such as `GO:0008150`: a prefix, a colon,
//! and one or more ASCII alphanumerics.

use crate::errors::CoreError;

/// Prefix accepted when no other is configured.
pub const DEFAULT_ID_PREFIX: &str = "GO";

/// Matches identifiers of the form `<prefix>:<alphanumerics>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdPattern {
    prefix: String,
}

impl IdPattern {
    /// Build a pattern for the given prefix.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidIdPrefix` if the prefix is empty or contains
    /// anything other than ASCII alphanumerics and `_`.
    pub fn new(prefix: &str) -> Result<Self, CoreError> {
        let valid = !prefix.is_empty()
            && prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(CoreError::InvalidIdPrefix(prefix.to_string()));
        }
        Ok(Self {
            prefix: prefix.to_string(),
        })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether `id` is an identifier in this ontology.
    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        id.strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .is_some_and(|code| !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric()))
    }
}

impl Default for IdPattern {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}
