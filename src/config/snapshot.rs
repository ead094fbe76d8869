// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration with a frozen default copy of every attribute.

use indexmap::IndexMap;
use serde_json::Value;

use super::definition::ConfigDefinition;

/// Live attributes plus a frozen copy of their declared values.
///
/// The frozen copy is cloned out of the definition, so mutating a live list
/// or map never reaches it. Restoring assigns a fresh clone each time.
#[derive(Debug, Clone)]
pub struct SnapshotConfig<V = Value> {
    name: String,
    defaults: IndexMap<String, V>,
    live: IndexMap<String, V>,
}

impl<V: Clone> SnapshotConfig<V> {
    /// Capture the definition's values as defaults and start live values equal to them.
    pub fn new(definition: ConfigDefinition<V>) -> Self {
        let (name, live) = definition.into_parts();
        let defaults = live.clone();

        tracing::debug!("Captured {} defaults for {}", defaults.len(), name);

        Self {
            name,
            defaults,
            live,
        }
    }

    /// Name of the definition this config was built from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value of an attribute.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.live.get(key)
    }

    /// Mutable access to the current value of an attribute.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.live.get_mut(key)
    }

    /// Replace an attribute, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.live.insert(key.into(), value)
    }

    /// Whether an attribute is currently set.
    pub fn contains(&self, key: &str) -> bool {
        self.live.contains_key(key)
    }

    /// Attribute names currently set.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.live.keys().map(String::as_str)
    }

    /// The frozen default for an attribute.
    pub fn default_value(&self, key: &str) -> Option<&V> {
        self.defaults.get(key)
    }

    /// Every frozen default.
    pub fn defaults(&self) -> &IndexMap<String, V> {
        &self.defaults
    }

    /// Put every declared attribute back to its default.
    ///
    /// Attributes set after definition that were never declared are left alone.
    pub fn restore_defaults(&mut self) {
        tracing::debug!("Restoring {} defaults for {}", self.defaults.len(), self.name);

        for (key, value) in &self.defaults {
            self.live.insert(key.clone(), value.clone());
        }
    }
}

impl<V: Clone + PartialEq> SnapshotConfig<V> {
    /// Whether a declared attribute still holds its default.
    pub fn is_default(&self, key: &str) -> bool {
        match (self.live.get(key), self.defaults.get(key)) {
            (Some(live), Some(default)) => live == default,
            _ => false,
        }
    }
}
