//! List command handler
//!
//! Prints the current registry either as a human-readable table or as the
//! raw JSON registry object for scripting.

use crate::error::{McpctlError, Result};
use crate::registry::MCP_SERVERS_KEY;
use crate::store::{ConfigStore, Document};
use prettytable::{cell, row, Table};
use serde_json::{Map, Value};

/// Print the registered MCP servers
///
/// With `json` set, the registry object is emitted as pretty JSON on stdout;
/// otherwise a table with one row per entry is printed.
pub fn run_list(store: &ConfigStore, json: bool) -> Result<()> {
    let doc = store.read()?;
    let servers = registry_view(&doc);

    if json {
        output_registry_json(&servers)
    } else {
        output_registry_table(&servers, store);
        Ok(())
    }
}

/// The registry mapping, or an empty one when the key is absent or malformed
fn registry_view(doc: &Document) -> Map<String, Value> {
    match doc.get(MCP_SERVERS_KEY) {
        Some(Value::Object(servers)) => servers.clone(),
        _ => Map::new(),
    }
}

/// Output the registry in JSON format
///
/// # Errors
///
/// Returns `McpctlError::Serialization` if serialization fails
fn output_registry_json(servers: &Map<String, Value>) -> Result<()> {
    let json = serde_json::to_string_pretty(servers).map_err(McpctlError::Serialization)?;
    println!("{}", json);
    Ok(())
}

/// Output the registry in table format
fn output_registry_table(servers: &Map<String, Value>, store: &ConfigStore) {
    if servers.is_empty() {
        println!("No MCP servers registered in {}", store.path().display());
        return;
    }

    let mut table = Table::new();
    table.add_row(row!["Name", "Command", "Arguments"]);

    for (name, settings) in servers {
        let (command, args) = launch_fields(settings);
        table.add_row(row![name, command, args]);
    }

    println!("\nMCP servers registered in {}:\n", store.path().display());
    table.printstd();
    println!();
}

/// Extract displayable launch fields from an opaque settings value
///
/// Settings without the typical `{command, args}` shape display as `-`.
fn launch_fields(settings: &Value) -> (String, String) {
    let command = settings
        .get("command")
        .and_then(|v| v.as_str())
        .unwrap_or("-")
        .to_string();
    let args = settings
        .get("args")
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string());
    (command, args)
}
