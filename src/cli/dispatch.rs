// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command registration and execution for the binary.

use serde_json::{json, Value};
use std::sync::Arc;

use crate::command::{BoundArgs, FnCommand, Registry, RegistryConfig, Signature};
use crate::config::{ConfigDefinition, IndexedConfig};
use crate::error::{DispatchError, Result};

use super::args::Cli;

/// Definition used when no `--config` file is given.
const BUILTIN_DEFINITION: &str = r#"
name = "cmdkit"
verbose = false
retries = 3
targets = ["build", "test"]
"#;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let definition = match &cli.config {
        Some(path) => ConfigDefinition::load_from(path)?,
        None => ConfigDefinition::from_toml_str("builtin", BUILTIN_DEFINITION)?,
    };
    let config = Arc::new(IndexedConfig::new(definition));

    let registry = build_registry(RegistryConfig::for_program("cmdkit"), config);

    let result = registry.dispatch(cli.key(), cli.args())?;
    if !result.is_null() {
        println!("{}", result);
    }

    Ok(())
}

/// Registry holding the built-in commands.
pub fn build_registry(settings: RegistryConfig, config: Arc<IndexedConfig>) -> Registry {
    let mut registry = Registry::with_config(settings);

    registry.register(Arc::new(FnCommand::new(
        "add",
        Signature::new().required("x").required("y"),
        |args| weighted_sum(args, &[("x", 1), ("y", 1)]),
    )));

    registry.register(Arc::new(FnCommand::new(
        "weighted_sum",
        Signature::new()
            .required("ex")
            .optional("why", 1)
            .optional("zee", 2),
        |args| weighted_sum(args, &[("ex", 1), ("why", 2), ("zee", 3)]),
    )));

    let for_get = Arc::clone(&config);
    registry.register(Arc::new(FnCommand::new(
        "get",
        Signature::new().required("key"),
        move |args| {
            let key: String = args.value("key")?;
            for_get
                .read(&key)
                .cloned()
                .map_err(|e| DispatchError::Failed {
                    command: "get".to_string(),
                    message: e.to_string(),
                })
        },
    )));

    registry.register(Arc::new(FnCommand::new(
        "keys",
        Signature::new(),
        move |_| Ok(json!(config.keys().collect::<Vec<_>>())),
    )));

    registry.register(Arc::new(FnCommand::new(
        "version",
        Signature::new(),
        |_| Ok(json!(crate::version::version_string())),
    )));

    registry
}

/// Sum of `weight * value` over the named parameters.
///
/// Integer inputs are summed exactly as `i64`; floats, or an integer sum that
/// overflows, fall back to `f64`.
fn weighted_sum(
    args: &BoundArgs,
    terms: &[(&str, i64)],
) -> std::result::Result<Value, DispatchError> {
    let exact = terms.iter().try_fold(0i64, |acc, &(name, weight)| {
        args.get(name)?.as_i64()?.checked_mul(weight)?.checked_add(acc)
    });
    if let Some(sum) = exact {
        return Ok(json!(sum));
    }

    let mut sum = 0.0;
    for &(name, weight) in terms {
        let value: f64 = args.value(name)?;
        sum += value * weight as f64;
    }
    Ok(json!(sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Args;
    use crate::error::CmdkitError;

    fn registry() -> Registry {
        let def = ConfigDefinition::from_toml_str("builtin", BUILTIN_DEFINITION).unwrap();
        build_registry(
            RegistryConfig::for_program("cmdkit"),
            Arc::new(IndexedConfig::new(def)),
        )
    }

    #[test]
    fn test_builtin_usage() {
        let reg = registry();
        assert_eq!(
            reg.usage_lines(),
            &[
                "USAGE:".to_string(),
                "\tcmdkit --add <x> <y>".to_string(),
                "\tcmdkit --weighted-sum <ex> [why=1] [zee=2]".to_string(),
                "\tcmdkit --get <key>".to_string(),
                "\tcmdkit --keys ".to_string(),
                "\tcmdkit --version ".to_string(),
            ]
        );
    }

    #[test]
    fn test_add_and_weighted_sum() {
        let reg = registry();
        assert_eq!(
            reg.dispatch(Some("--add"), Args::new().arg(4).arg(5)).unwrap(),
            json!(9)
        );
        assert_eq!(
            reg.dispatch(Some("--weighted-sum"), Args::new().arg(1)).unwrap(),
            json!(9)
        );
        assert_eq!(
            reg.dispatch(Some("--add"), Args::new().arg(0.5).arg(1)).unwrap(),
            json!(1.5)
        );
    }

    #[test]
    fn test_large_integers_stay_exact() {
        let reg = registry();
        assert_eq!(
            reg.dispatch(Some("--add"), Args::new().arg(9007199254740993i64).arg(0))
                .unwrap(),
            json!(9007199254740993i64)
        );
        assert_eq!(
            reg.dispatch(Some("--add"), Args::new().arg(i64::MAX).arg(1))
                .unwrap(),
            json!(i64::MAX as f64 + 1.0)
        );
    }

    #[test]
    fn test_get_reads_config() {
        let reg = registry();
        assert_eq!(
            reg.dispatch(Some("--get"), Args::new().arg("retries")).unwrap(),
            json!(3)
        );
        let err = reg
            .dispatch(Some("--get"), Args::new().arg("nope"))
            .unwrap_err();
        assert!(matches!(
            err,
            CmdkitError::Dispatch(DispatchError::Failed { .. })
        ));
    }

    #[test]
    fn test_keys_lists_definition_order() {
        let reg = registry();
        assert_eq!(
            reg.dispatch(Some("--keys"), Args::new()).unwrap(),
            json!(["name", "verbose", "retries", "targets"])
        );
    }

    #[test]
    fn test_add_rejects_text() {
        let reg = registry();
        assert!(reg
            .dispatch(Some("--add"), Args::new().arg("four").arg(5))
            .is_err());
    }
}
