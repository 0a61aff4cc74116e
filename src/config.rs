//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rstree/rstree.toml`
//! 3. Environment variables: `RSTREE_*` prefix
//!
//! CLI flags override whatever was loaded here.

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Number of nodes to generate
    pub nodes: usize,
    /// Exclusive upper bound for node values
    pub modulus: u32,
    /// Seed for reproducible trees; None means OS entropy
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            nodes: 32,
            modulus: 100,
            seed: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("nodes", 32u64)?
            .set_default("modulus", 100u64)?;

        if let Some(dirs) = ProjectDirs::from("", "", "rstree") {
            let global = dirs.config_dir().join("rstree.toml");
            builder = builder.add_source(File::from(global).required(false));
        }

        // Env values arrive as strings; parse them into the numeric fields
        builder = builder.add_source(Environment::with_prefix("RSTREE").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Effective settings rendered as TOML, for `rstree info`.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }
}
