// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Callables that can be registered as commands.

use serde_json::Value;
use std::fmt;

use super::args::{Args, BoundArgs};
use super::signature::Signature;
use crate::error::DispatchError;

/// Something the registry can expose as a command.
pub trait Command: Send + Sync {
    /// Identifier the command key is derived from.
    fn name(&self) -> &str;

    /// Declared parameters, used for usage text.
    fn signature(&self) -> &Signature;

    /// Invoke with the supplied values.
    ///
    /// Implementations decide how values are matched to parameters; the
    /// registry passes them through untouched.
    fn call(&self, args: Args) -> Result<Value, DispatchError>;
}

type Handler = dyn Fn(&BoundArgs) -> Result<Value, DispatchError> + Send + Sync;

/// A command backed by a closure.
///
/// Supplied values are bound with [`Signature::bind`] before the closure
/// runs, so the closure always sees every parameter.
pub struct FnCommand {
    name: String,
    signature: Signature,
    handler: Box<Handler>,
}

impl FnCommand {
    /// Wrap `handler` as a command called `name`.
    pub fn new<F>(name: impl Into<String>, signature: Signature, handler: F) -> Self
    where
        F: Fn(&BoundArgs) -> Result<Value, DispatchError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            signature,
            handler: Box::new(handler),
        }
    }
}

impl fmt::Debug for FnCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCommand")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

impl Command for FnCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn call(&self, args: Args) -> Result<Value, DispatchError> {
        let bound = self.signature.bind(&self.name, args)?;
        (self.handler)(&bound)
    }
}
