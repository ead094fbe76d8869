// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command registration and dispatch.
//!
//! Commands are registered under a key derived from their identifier
//! (`a_function` becomes `--a-function`). The registry keeps a usage line per
//! registration and resolves keys to commands at dispatch time.

mod args;
mod callable;
pub mod key;
mod registry;
mod signature;

pub use args::{Args, BoundArgs};
pub use callable::{Command, FnCommand};
pub use key::command_key;
pub use registry::{Registry, RegistryConfig};
pub use signature::{display_value, Param, Signature};
