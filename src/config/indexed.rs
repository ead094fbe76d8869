// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration with a runtime override layer above its defaults.

use indexmap::IndexMap;
use serde_json::Value;

use super::definition::ConfigDefinition;
use crate::error::{ConfigError, Result};

/// Defaults plus overrides; reads prefer overrides.
///
/// Defaults are moved out of the definition without copying. Changing one in
/// place through [`IndexedConfig::default_mut`] redefines the baseline, the
/// same as `write(key, value, true)`.
#[derive(Debug, Clone)]
pub struct IndexedConfig<V = Value> {
    name: String,
    defaults: IndexMap<String, V>,
    overrides: IndexMap<String, V>,
}

impl<V> IndexedConfig<V> {
    /// Take the definition's values as defaults, with no overrides.
    pub fn new(definition: ConfigDefinition<V>) -> Self {
        let (name, defaults) = definition.into_parts();

        tracing::debug!("Defined {} with {} defaults", name, defaults.len());

        Self {
            name,
            defaults,
            overrides: IndexMap::new(),
        }
    }

    /// Name of the definition this config was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Effective value: the override if one exists, else the default.
    pub fn read(&self, key: &str) -> Result<&V> {
        self.overrides
            .get(key)
            .or_else(|| self.defaults.get(key))
            .ok_or_else(|| {
                ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into()
            })
    }

    /// Write an override, or a new default when `as_default` is set.
    pub fn write(&mut self, key: impl Into<String>, value: V, as_default: bool) {
        let key = key.into();
        if as_default {
            tracing::trace!("{}: default {} redefined", self.name, key);
            self.defaults.insert(key, value);
        } else {
            tracing::trace!("{}: override {} set", self.name, key);
            self.overrides.insert(key, value);
        }
    }

    /// Drop every override. Defaults are untouched.
    pub fn restore_defaults(&mut self) {
        tracing::debug!(
            "Clearing {} overrides for {}",
            self.overrides.len(),
            self.name
        );
        self.overrides.clear();
    }

    /// Drop a single override, returning it.
    pub fn remove_override(&mut self, key: &str) -> Option<V> {
        self.overrides.shift_remove(key)
    }

    /// Whether `key` currently has an override.
    pub fn is_overridden(&self, key: &str) -> bool {
        self.overrides.contains_key(key)
    }

    /// Whether `read(key)` would succeed.
    pub fn contains(&self, key: &str) -> bool {
        self.overrides.contains_key(key) || self.defaults.contains_key(key)
    }

    /// In-place access to a default value.
    pub fn default_mut(&mut self, key: &str) -> Option<&mut V> {
        self.defaults.get_mut(key)
    }

    /// The baseline layer.
    pub fn defaults(&self) -> &IndexMap<String, V> {
        &self.defaults
    }

    /// The runtime layer.
    pub fn overrides(&self) -> &IndexMap<String, V> {
        &self.overrides
    }

    /// Every readable key: defaults in declaration order, then override-only keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str).chain(
            self.overrides
                .keys()
                .filter(|k| !self.defaults.contains_key(*k))
                .map(String::as_str),
        )
    }
}
