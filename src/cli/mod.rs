// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for cmdkit.
//!
//! Turns the process arguments into a command key plus values and hands them
//! to a [`Registry`](crate::command::Registry).

pub mod args;
mod dispatch;

pub use args::Cli;
pub use dispatch::{build_registry, run};
