// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration definitions.

use indexmap::IndexMap;
use serde_json::Value;

/// The declared attributes of a configuration, in declaration order.
///
/// A definition is the single point where defaults come from: both
/// [`SnapshotConfig`](super::SnapshotConfig) and
/// [`IndexedConfig`](super::IndexedConfig) are built from one.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDefinition<V = Value> {
    name: String,
    attributes: IndexMap<String, V>,
}

impl<V> ConfigDefinition<V> {
    /// An empty definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Declare an attribute. Declaring the same name twice keeps the later value.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<V>) -> Self {
        self.insert(key, value);
        self
    }

    /// Declare an attribute in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Name of the configuration being defined.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared attributes in declaration order.
    pub fn attributes(&self) -> &IndexMap<String, V> {
        &self.attributes
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, IndexMap<String, V>) {
        (self.name, self.attributes)
    }
}

impl<V> FromIterator<(String, V)> for ConfigDefinition<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            name: String::new(),
            attributes: iter.into_iter().collect(),
        }
    }
}
