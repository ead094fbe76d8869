// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Declared parameter metadata for commands.
//!
//! A [`Signature`] is the ordered list of parameters a command accepts. The
//! registry only reads it to render usage lines; binding supplied values
//! against it is the command's own business (see [`Signature::bind`]).

use indexmap::IndexMap;
use serde_json::Value;

use super::args::{Args, BoundArgs};
use crate::error::ArgumentError;

/// A single declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    name: String,
    default: Option<Value>,
}

impl Param {
    /// A parameter that must be supplied.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter with a default value.
    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a default value is attached.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The default value, if any.
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Human-readable form of the default value, if any.
    pub fn default_repr(&self) -> Option<String> {
        self.default.as_ref().map(display_value)
    }

    /// Render as `<name>` or `[name=default]`.
    pub fn render(&self) -> String {
        match self.default_repr() {
            Some(repr) => format!("[{}={}]", self.name, repr),
            None => format!("<{}>", self.name),
        }
    }
}

/// Render a value the way a user would type it: strings bare, everything
/// else as JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Ordered parameter list of a command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    /// An empty signature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(Param::required(name));
        self
    }

    /// Append a parameter with a default value.
    pub fn optional(mut self, name: impl Into<String>, default: impl Into<Value>) -> Self {
        self.params.push(Param::optional(name, default));
        self
    }

    /// Append an already-built parameter.
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Parameters in declaration order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of declared parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the command takes no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Space-joined rendering of every parameter.
    pub fn render(&self) -> String {
        self.params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Bind positional and named values to parameters.
    ///
    /// Positional values fill parameters in declaration order, named values
    /// fill the parameter of the same name, and anything still unbound takes
    /// its default. `command` is only used in error messages.
    pub fn bind(&self, command: &str, args: Args) -> Result<BoundArgs, ArgumentError> {
        let (positional, named) = args.into_parts();

        if positional.len() > self.params.len() {
            return Err(ArgumentError::TooManyPositional {
                command: command.to_string(),
                max: self.params.len(),
                given: positional.len(),
            });
        }

        let mut supplied: IndexMap<String, Value> = IndexMap::new();
        for (param, value) in self.params.iter().zip(positional) {
            supplied.insert(param.name.clone(), value);
        }

        for (name, value) in named {
            if !self.params.iter().any(|p| p.name == name) {
                return Err(ArgumentError::Unexpected {
                    command: command.to_string(),
                    name,
                });
            }
            if supplied.contains_key(&name) {
                return Err(ArgumentError::MultipleValues {
                    command: command.to_string(),
                    name,
                });
            }
            supplied.insert(name, value);
        }

        let mut values = IndexMap::with_capacity(self.params.len());
        for param in &self.params {
            let value = match supplied.swap_remove(&param.name) {
                Some(value) => value,
                None => match &param.default {
                    Some(default) => default.clone(),
                    None => {
                        return Err(ArgumentError::Missing {
                            command: command.to_string(),
                            name: param.name.clone(),
                        })
                    }
                },
            };
            values.insert(param.name.clone(), value);
        }

        Ok(BoundArgs::new(command, values))
    }
}
