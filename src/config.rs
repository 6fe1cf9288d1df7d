//! Optional YAML configuration for the rewrite and decorate rules.
//!
//! ```yaml
//! rewrite:
//!   from: "public final"
//!   to: "public static final"
//! decorate:
//!   prefix: "public final static String "
//!   suffix: ";\n"
//!   annotation: ": str "
//! ```
//!
//! Every key is optional and falls back to the built-in rule.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::decorate::Decorator;
use crate::error::JavafyError;
use crate::rewrite::KeywordRule;

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rewrite: KeywordRule,
    pub decorate: Decorator,
}

impl Config {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, JavafyError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config =
            serde_yaml::from_str(content).map_err(|e| JavafyError::Config(e.to_string()))?;

        if config.rewrite.from.is_empty() {
            return Err(JavafyError::Config(
                "rewrite.from must not be empty".to_string(),
            ));
        }

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, JavafyError> {
        let content = fs::read_to_string(path).map_err(|source| JavafyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Config::from_yaml(&content)
    }
}
