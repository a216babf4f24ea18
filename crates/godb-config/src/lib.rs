//! # godb-config
//!
//! Layered configuration loading for godb using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GODB_*` prefix, `__` as separator)
//! 2. `./godb.toml` in the working directory
//! 3. User-level `~/.config/godb/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `GODB_ONTOLOGY__ID_PREFIX` -> `ontology.id_prefix`,
//! `GODB_SOURCE__URL` -> `source.url`, etc.
//!
//! No source is required: with no files and no variables the defaults load a
//! Gene Ontology release.
//!
//! ```no_run
//! use godb_config::GodbConfig;
//!
//! let config = GodbConfig::load().expect("config");
//! let pattern = config.ontology.id_pattern().expect("valid prefix");
//! assert!(pattern.matches("GO:0008150"));
//! ```

mod error;
mod log;
mod ontology;
mod source;

pub use error::ConfigError;
pub use log::LogConfig;
pub use ontology::OntologyConfig;
pub use source::SourceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "GODB_";

/// Name of the working-directory config file.
pub const LOCAL_CONFIG_FILE: &str = "godb.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GodbConfig {
    #[serde(default)]
    pub ontology: OntologyConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl GodbConfig {
    /// Load configuration from all sources and validate it.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.ontology.id_pattern()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // `GODB_LOG` is a filter directive for the subscriber, not the `log` table.
        figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["log"]).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("godb").join("config.toml"))
    }
}
