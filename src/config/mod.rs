// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration containers with restorable defaults.
//!
//! Two flavours are built from the same [`ConfigDefinition`]:
//!
//! - [`SnapshotConfig`] keeps a frozen copy of every declared value and can
//!   put all of them back at once.
//! - [`IndexedConfig`] layers runtime overrides above the declared defaults
//!   and restores by dropping the overrides.

mod definition;
mod indexed;
mod loader;
mod snapshot;

pub use definition::ConfigDefinition;
pub use indexed::IndexedConfig;
pub use loader::{load_definition_from, parse_definition};
pub use snapshot::SnapshotConfig;
