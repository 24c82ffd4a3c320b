//! Enable/disable command handlers
//!
//! `enable` registers or updates one entry; `disable` removes it. Both are
//! idempotent and write the config file only when the document actually
//! changed.

use crate::error::{McpctlError, Result};
use crate::registry::{remove_entry, set_entry};
use crate::store::ConfigStore;
use colored::Colorize;
use serde_json::{json, Map, Value};

/// Build a settings object from the `enable` CLI options
///
/// Either `settings` holds a raw JSON object, or `command` (with optional
/// `args` and `env`) describes the typical stdio launch spec.
///
/// # Errors
///
/// Returns `McpctlError::Config` when neither form is usable: missing
/// `--command`, malformed `--settings` JSON, a non-object settings value, or
/// an `--env` entry without a `KEY=VALUE` shape.
pub fn build_settings(
    command: Option<String>,
    args: Vec<String>,
    env: Vec<String>,
    settings: Option<String>,
) -> Result<Value> {
    if let Some(raw) = settings {
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| McpctlError::Config(format!("Invalid --settings JSON: {}", e)))?;
        if !value.is_object() {
            return Err(
                McpctlError::Config("--settings must be a JSON object".to_string()).into(),
            );
        }
        return Ok(value);
    }

    let command = command.ok_or_else(|| {
        McpctlError::Config("Either --command or --settings must be provided".to_string())
    })?;

    let mut settings = json!({
        "command": command,
        "args": args,
    });
    if !env.is_empty() {
        let mut env_map = Map::new();
        for pair in env {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                McpctlError::Config(format!("Invalid --env entry '{}', expected KEY=VALUE", pair))
            })?;
            env_map.insert(key.to_string(), Value::String(value.to_string()));
        }
        settings["env"] = Value::Object(env_map);
    }
    Ok(settings)
}

/// Register or update the entry `name`
///
/// Returns whether the config file was written.
pub fn run_enable(store: &ConfigStore, name: &str, settings: Value) -> Result<bool> {
    let mut doc = store.read()?;
    let changed = set_entry(&mut doc, name, &settings);

    if changed {
        store.write(&doc)?;
        println!(
            "{}",
            format!("Enabled '{}' in {}", name, store.path().display()).green()
        );
    } else {
        println!("'{}' is already registered with these settings", name);
    }
    Ok(changed)
}

/// Remove the entry `name`
///
/// Returns whether the config file was written.
pub fn run_disable(store: &ConfigStore, name: &str) -> Result<bool> {
    let mut doc = store.read()?;
    let changed = remove_entry(&mut doc, name);

    if changed {
        store.write(&doc)?;
        println!(
            "{}",
            format!("Disabled '{}' in {}", name, store.path().display()).green()
        );
    } else {
        println!("'{}' is not registered, nothing to do", name);
    }
    Ok(changed)
}
