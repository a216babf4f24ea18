//! Provenance recorded alongside the loaded ontology.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    "Gene Ontology".to_string()
}

fn default_url() -> String {
    "http://current.geneontology.org/ontology/go-basic.obo".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Human-readable source name written to `map_metadata`.
    #[serde(default = "default_name")]
    pub name: String,

    /// Where the ontology file was downloaded from.
    #[serde(default = "default_url")]
    pub url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            url: default_url(),
        }
    }
}
