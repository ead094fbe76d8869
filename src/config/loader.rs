// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Building configuration definitions from TOML.

use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

use super::definition::ConfigDefinition;
use crate::error::{CmdkitError, ConfigError, Result, ResultExt};

impl ConfigDefinition<Value> {
    /// Parse a TOML document; each top-level key becomes an attribute.
    pub fn from_toml_str(name: impl Into<String>, content: &str) -> Result<Self> {
        parse_definition(name, content)
    }

    /// Read a TOML file; the file stem names the definition.
    pub fn load_from(path: &Path) -> Result<Self> {
        load_definition_from(path)
    }
}

/// Load a definition from a TOML file.
pub fn load_definition_from(path: &Path) -> Result<ConfigDefinition> {
    tracing::debug!("Loading configuration definition from: {:?}", path);

    if !path.exists() {
        return Err(CmdkitError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read {}", path.display()))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    parse_definition(name, &content)
}

/// Parse a definition from a TOML string.
pub fn parse_definition(name: impl Into<String>, content: &str) -> Result<ConfigDefinition> {
    let attributes: IndexMap<String, Value> = toml::from_str(content).map_err(|e| {
        CmdkitError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    let mut definition = ConfigDefinition::new(name);
    for (key, value) in attributes {
        definition.insert(key, value);
    }
    Ok(definition)
}
