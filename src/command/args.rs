// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Values passed to a command at dispatch time.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ArgumentError;

/// Positional and named values supplied to a dispatch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    positional: Vec<Value>,
    named: IndexMap<String, Value>,
}

impl Args {
    /// No values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-collected values.
    pub fn from_parts(positional: Vec<Value>, named: IndexMap<String, Value>) -> Self {
        Self { positional, named }
    }

    /// Append a positional value.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named value. A later value for the same name replaces the earlier one.
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Positional values in the order given.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Named values in the order given.
    pub fn named_values(&self) -> &IndexMap<String, Value> {
        &self.named
    }

    /// Whether no values were supplied.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Split into positional and named values.
    pub fn into_parts(self) -> (Vec<Value>, IndexMap<String, Value>) {
        (self.positional, self.named)
    }
}

/// Values bound to a command's parameters, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgs {
    command: String,
    values: IndexMap<String, Value>,
}

impl BoundArgs {
    pub(crate) fn new(command: &str, values: IndexMap<String, Value>) -> Self {
        Self {
            command: command.to_string(),
            values,
        }
    }

    /// Raw value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Value bound to `name`, converted to `T`.
    pub fn value<T: DeserializeOwned>(&self, name: &str) -> Result<T, ArgumentError> {
        let raw = self.values.get(name).ok_or_else(|| ArgumentError::Missing {
            command: self.command.clone(),
            name: name.to_string(),
        })?;

        T::deserialize(raw).map_err(|e| ArgumentError::TypeMismatch {
            command: self.command.clone(),
            name: name.to_string(),
            message: e.to_string(),
        })
    }

    /// Every bound value in parameter order.
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }
}
