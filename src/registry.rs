//! Entry operations over the MCP server registry
//!
//! Pure functions that mutate an in-memory [`Document`] and report whether a
//! mutation occurred. The registry lives under the reserved top-level
//! `mcpServers` key; every other top-level key is never interpreted.
//!
//! Settings are opaque JSON objects compared by deep structural equality and
//! always replaced wholesale, never merged field by field.

use crate::store::Document;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Reserved top-level key holding the MCP server registry
pub const MCP_SERVERS_KEY: &str = "mcpServers";

/// A named MCP server registration
///
/// The settings value is opaque to mcpctl: whatever object the caller
/// supplies is stored verbatim under the entry's name.
///
/// # Examples
///
/// ```
/// use mcpctl::registry::ServerEntry;
///
/// let entry = ServerEntry::stdio("github", "npx", ["-y", "server-github"]);
/// assert_eq!(entry.name, "github");
/// assert_eq!(entry.settings["command"], "npx");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Entry name, unique within the registry
    pub name: String,

    /// Opaque launch settings, typically `{"command": ..., "args": [...]}`
    pub settings: Value,
}

impl ServerEntry {
    /// Create an entry from a name and a settings value
    pub fn new(name: impl Into<String>, settings: Value) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }

    /// Build the typical stdio launch spec: `{"command": ..., "args": [...]}`
    pub fn stdio<S>(
        name: impl Into<String>,
        command: impl Into<String>,
        args: impl IntoIterator<Item = S>,
    ) -> Self
    where
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        Self {
            name: name.into(),
            settings: json!({
                "command": command.into(),
                "args": args,
            }),
        }
    }
}

/// Insert or replace the entry `name` in the document's registry
///
/// Creates the registry mapping when absent (a non-object value under the
/// registry key is replaced by an empty mapping first). The entry is
/// assigned only when absent or structurally unequal to `settings`.
///
/// Returns whether the document was mutated.
pub fn set_entry(doc: &mut Document, name: &str, settings: &Value) -> bool {
    let registry = doc
        .entry(MCP_SERVERS_KEY.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !registry.is_object() {
        *registry = Value::Object(Map::new());
    }
    let servers = registry.as_object_mut().expect("registry is an object");

    match servers.get(name) {
        Some(current) if current == settings => false,
        _ => {
            servers.insert(name.to_string(), settings.clone());
            true
        }
    }
}

/// Delete the entry `name` from the document's registry
///
/// Idempotent: a missing registry or a missing entry is a no-op. The
/// registry key itself is left in place even when it becomes empty; callers
/// that want the key dropped use
/// [`Reconciler::prune_empty_registry`](crate::reconcile::Reconciler::prune_empty_registry).
///
/// Returns whether the document was mutated.
pub fn remove_entry(doc: &mut Document, name: &str) -> bool {
    match doc.get_mut(MCP_SERVERS_KEY) {
        // shift_remove keeps the remaining entries in their original order.
        Some(Value::Object(servers)) => servers.shift_remove(name).is_some(),
        _ => false,
    }
}
