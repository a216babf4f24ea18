//! Which identifiers count as ontology terms.

use godb_core::ids::{DEFAULT_ID_PREFIX, IdPattern};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OntologyConfig {
    /// Prefix before the `:` of a term identifier (`GO` for `GO:0008150`).
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            id_prefix: default_id_prefix(),
        }
    }
}

impl OntologyConfig {
    /// Compile the configured prefix into an identifier matcher.
    pub fn id_pattern(&self) -> Result<IdPattern, ConfigError> {
        IdPattern::new(&self.id_prefix).map_err(|e| ConfigError::InvalidValue {
            field: "ontology.id_prefix".to_string(),
            reason: e.to_string(),
        })
    }

    /// Whether the prefix was overridden away from `GO`.
    #[must_use]
    pub fn is_custom_prefix(&self) -> bool {
        self.id_prefix != DEFAULT_ID_PREFIX
    }
}
