// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::PathBuf;

use crate::command::Args;

/// cmdkit - command registry and restorable configuration
///
/// Runs one of the registered commands. Without a command, prints usage.
#[derive(Parser, Debug)]
#[command(name = "cmdkit")]
#[command(author = "Eshan Roy")]
#[command(about = "Dispatch hyphenated commands to registered functions", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// TOML file defining the configuration read by `--get` and `--keys`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command key followed by its values; `name=value` passes a named value
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// The command key, if one was given.
    ///
    /// The first token is always the key, even without a `--` prefix, so a
    /// mistyped command fails to resolve instead of falling back to usage.
    pub fn key(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    /// Values following the key, split into positional and named.
    pub fn args(&self) -> Args {
        let skip = usize::from(self.key().is_some());
        let mut positional = Vec::new();
        let mut named = IndexMap::new();

        for token in self.command.iter().skip(skip) {
            match split_named(token) {
                Some((name, raw)) => {
                    named.insert(name.to_string(), parse_value(raw));
                }
                None => positional.push(parse_value(token)),
            }
        }

        Args::from_parts(positional, named)
    }
}

/// Split `name=value` when `name` is a plain identifier.
fn split_named(token: &str) -> Option<(&str, &str)> {
    let (name, raw) = token.split_once('=')?;
    let is_ident = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_ident.then_some((name, raw))
}

/// Parse a token as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
