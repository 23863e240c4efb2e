//! Registry configuration.
//!
//! Declarative setup for a [`ResourceRegistry`](crate::ResourceRegistry),
//! loadable from JSON. Only the search-path list is configurable; plugins
//! are code and register themselves at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Search directories, in priority order (first is probed first).
    pub search_paths: Vec<PathBuf>,
}

impl RegistryConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
