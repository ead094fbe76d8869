// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command registry and dispatcher.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::io::{self, Write};
use std::sync::Arc;

use super::args::Args;
use super::callable::Command;
use super::key::command_key;
use crate::error::{DispatchError, Result};

/// Usage header and program prefix for a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// First line of the usage listing.
    pub header: String,

    /// Text placed before the command key on every usage line.
    pub prefix: String,
}

impl RegistryConfig {
    /// Configuration for a named program.
    pub fn for_program(program: &str) -> Self {
        Self {
            prefix: format!("\t{}", program),
            ..Self::default()
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

        Self {
            header: "USAGE:".to_string(),
            prefix: format!("\t{}", program),
        }
    }
}

/// Maps command keys to commands and accumulates usage text.
pub struct Registry {
    config: RegistryConfig,
    commands: IndexMap<String, Arc<dyn Command>>,
    usage: Vec<String>,
}

impl Registry {
    /// An empty registry using the running program's name.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// An empty registry with explicit usage settings.
    pub fn with_config(config: RegistryConfig) -> Self {
        let usage = vec![config.header.clone()];
        Self {
            config,
            commands: IndexMap::new(),
            usage,
        }
    }

    /// Usage settings this registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a command and hand it back unchanged.
    ///
    /// A key collision replaces the dispatch entry but keeps both usage lines.
    pub fn register<C: Command + 'static>(&mut self, command: Arc<C>) -> Arc<C> {
        let key = command_key(command.name());
        let line = self.usage_line(&key, &*command);

        tracing::debug!("Registering command {}", key);

        let entry: Arc<dyn Command> = command.clone();
        if self.commands.insert(key.clone(), entry).is_some() {
            tracing::debug!("Command {} replaced an earlier registration", key);
        }
        self.usage.push(line);

        command
    }

    fn usage_line(&self, key: &str, command: &dyn Command) -> String {
        format!(
            "{} {} {}",
            self.config.prefix,
            key,
            command.signature().render()
        )
    }

    /// Look up a command by key.
    pub fn get(&self, key: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(key)
    }

    /// Whether a command is registered under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.commands.contains_key(key)
    }

    /// Registered keys in first-registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Number of distinct keys registered.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command has been registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Header plus one line per registration.
    pub fn usage_lines(&self) -> &[String] {
        &self.usage
    }

    /// The usage listing joined with newlines.
    pub fn usage_text(&self) -> String {
        self.usage.join("\n")
    }

    /// Write the usage listing followed by a newline.
    pub fn write_usage<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.usage_text())
    }

    /// Print the usage listing to stdout.
    pub fn usage(&self) -> Result<()> {
        self.write_usage(&mut io::stdout().lock())?;
        Ok(())
    }

    /// Resolve `key` and invoke its command, or print usage when `key` is `None`.
    pub fn dispatch(&self, key: Option<&str>, args: Args) -> Result<Value> {
        self.dispatch_to(&mut io::stdout().lock(), key, args)
    }

    /// Like [`Registry::dispatch`], writing usage to `out` instead of stdout.
    pub fn dispatch_to<W: Write>(
        &self,
        out: &mut W,
        key: Option<&str>,
        args: Args,
    ) -> Result<Value> {
        match key {
            Some(key) => self.invoke(key, args),
            None => {
                self.write_usage(out)?;
                Ok(Value::Null)
            }
        }
    }

    fn invoke(&self, key: &str, args: Args) -> Result<Value> {
        let command = self.commands.get(key).ok_or_else(|| {
            tracing::debug!("No command registered for {}", key);
            DispatchError::UnregisteredCommand {
                key: key.to_string(),
            }
        })?;

        tracing::debug!("Dispatching {} with {:?}", key, args);

        Ok(command.call(args)?)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("config", &self.config)
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("usage", &self.usage)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{FnCommand, Signature};
    use crate::error::{ArgumentError, CmdkitError};
    use serde_json::json;

    fn registry() -> Registry {
        Registry::with_config(RegistryConfig::for_program("prog"))
    }

    fn a_function() -> Arc<FnCommand> {
        Arc::new(FnCommand::new(
            "a_function",
            Signature::new().required("x").required("y"),
            |args| Ok(json!(args.value::<i64>("x")? + args.value::<i64>("y")?)),
        ))
    }

    fn one_two_three() -> Arc<FnCommand> {
        Arc::new(FnCommand::new(
            "one_two_three",
            Signature::new()
                .required("ex")
                .optional("why", 1)
                .optional("zee", 2),
            |args| {
                let ex: i64 = args.value("ex")?;
                let why: i64 = args.value("why")?;
                let zee: i64 = args.value("zee")?;
                Ok(json!(ex + 2 * why + 3 * zee))
            },
        ))
    }

    #[test]
    fn test_register_returns_same_command() {
        let mut reg = registry();
        let cmd = a_function();
        let returned = reg.register(cmd.clone());
        assert!(Arc::ptr_eq(&cmd, &returned));
        assert!(reg.contains("--a-function"));
    }

    #[test]
    fn test_dispatch_positional() {
        let mut reg = registry();
        reg.register(a_function());
        let result = reg.dispatch(Some("--a-function"), Args::new().arg(4).arg(5));
        assert_eq!(result.unwrap(), json!(9));
    }

    #[test]
    fn test_dispatch_uses_defaults() {
        let mut reg = registry();
        reg.register(one_two_three());
        let result = reg.dispatch(Some("--one-two-three"), Args::new().arg(1));
        assert_eq!(result.unwrap(), json!(9));
    }

    #[test]
    fn test_dispatch_matches_direct_call() {
        let mut reg = registry();
        let cmd = reg.register(one_two_three());
        let args = Args::new().arg(3).named("zee", 0);
        let direct = cmd.call(args.clone()).unwrap();
        let dispatched = reg.dispatch(Some("--one-two-three"), args).unwrap();
        assert_eq!(direct, dispatched);
    }

    #[test]
    fn test_dispatch_unregistered() {
        let mut reg = registry();
        reg.register(a_function());
        let err = reg.dispatch(Some("--b-function"), Args::new()).unwrap_err();
        assert!(matches!(
            err,
            CmdkitError::Dispatch(DispatchError::UnregisteredCommand { ref key }) if key == "--b-function"
        ));
    }

    #[test]
    fn test_dispatch_argument_mismatch_propagates() {
        let mut reg = registry();
        reg.register(a_function());
        let err = reg
            .dispatch(Some("--a-function"), Args::new().arg(4))
            .unwrap_err();
        assert!(matches!(
            err,
            CmdkitError::Dispatch(DispatchError::Argument(ArgumentError::Missing { .. }))
        ));
    }

    #[test]
    fn test_usage_lines() {
        let mut reg = registry();
        reg.register(a_function());
        reg.register(one_two_three());
        assert_eq!(
            reg.usage_lines(),
            &[
                "USAGE:".to_string(),
                "\tprog --a-function <x> <y>".to_string(),
                "\tprog --one-two-three <ex> [why=1] [zee=2]".to_string(),
            ]
        );
    }

    #[test]
    fn test_zero_parameter_usage_line() {
        let mut reg = registry();
        reg.register(Arc::new(FnCommand::new("noop", Signature::new(), |_| {
            Ok(Value::Null)
        })));
        assert_eq!(reg.usage_lines()[1], "\tprog --noop ");
    }

    #[test]
    fn test_dispatch_none_prints_usage() {
        let mut reg = registry();
        reg.register(a_function());

        let mut dispatched = Vec::new();
        let result = reg.dispatch_to(&mut dispatched, None, Args::new()).unwrap();
        assert_eq!(result, Value::Null);

        let mut printed = Vec::new();
        reg.write_usage(&mut printed).unwrap();
        assert_eq!(dispatched, printed);
        assert_eq!(
            String::from_utf8(printed).unwrap(),
            "USAGE:\n\tprog --a-function <x> <y>\n"
        );
    }

    #[test]
    fn test_reregistration_last_wins_and_duplicates_usage() {
        let mut reg = registry();
        reg.register(a_function());
        reg.register(Arc::new(FnCommand::new(
            "a_function",
            Signature::new().required("x"),
            |args| Ok(json!(args.value::<i64>("x")? * 10)),
        )));

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.usage_lines().len(), 3);
        assert_eq!(
            reg.dispatch(Some("--a-function"), Args::new().arg(2))
                .unwrap(),
            json!(20)
        );
    }

    #[test]
    fn test_registry_config_from_toml() {
        let config: RegistryConfig = toml::from_str(
            r#"
header = "Commands:"
prefix = "  tool"
"#,
        )
        .unwrap();
        assert_eq!(config.header, "Commands:");
        assert_eq!(config.prefix, "  tool");

        let partial: RegistryConfig = toml::from_str("header = \"Try:\"").unwrap();
        assert_eq!(partial.header, "Try:");
        assert!(partial.prefix.starts_with('\t'));
    }

    #[test]
    fn test_custom_header() {
        let reg = Registry::with_config(RegistryConfig {
            header: "Commands:".to_string(),
            prefix: "  tool".to_string(),
        });
        assert_eq!(reg.usage_text(), "Commands:");
        assert!(reg.is_empty());
    }
}
