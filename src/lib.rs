// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmdkit - building blocks for small command-line tools
//!
//! # Features
//!
//! - **Command Registry**: register callables under hyphenated keys derived
//!   from their names, with usage text built from declared parameters
//! - **Dispatcher**: resolve a key and invoke its command with positional and
//!   named values, or print usage when no key is given
//! - **Snapshot Config**: attributes with a frozen default copy that can be
//!   restored in one call
//! - **Indexed Config**: runtime overrides layered above defaults
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use cmdkit::command::{Args, FnCommand, Registry, RegistryConfig, Signature};
//! use serde_json::json;
//!
//! let mut registry = Registry::with_config(RegistryConfig::for_program("tool"));
//! registry.register(Arc::new(FnCommand::new(
//!     "one_two_three",
//!     Signature::new().required("ex").optional("why", 1).optional("zee", 2),
//!     |args| {
//!         let ex: i64 = args.value("ex")?;
//!         let why: i64 = args.value("why")?;
//!         let zee: i64 = args.value("zee")?;
//!         Ok(json!(ex + 2 * why + 3 * zee))
//!     },
//! )));
//!
//! let result = registry.dispatch(Some("--one-two-three"), Args::new().arg(1)).unwrap();
//! assert_eq!(result, json!(9));
//! ```

// Module declarations
pub mod cli;
pub mod command;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use command::{Args, Command, FnCommand, Registry, Signature};
pub use config::{ConfigDefinition, IndexedConfig, SnapshotConfig};
pub use error::{CmdkitError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmdkit.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match GIT_SHA {
            Some(sha) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            None => VERSION.to_string(),
        }
    }
}
