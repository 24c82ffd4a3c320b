//! Desired-set reconciliation
//!
//! Brings the persisted registry in line with a caller-supplied desired set:
//! entries outside the desired set are removed, entries inside it are added
//! or replaced, and the file is written at most once, or not at all when
//! nothing changed.

use crate::error::Result;
use crate::registry::{remove_entry, set_entry, ServerEntry, MCP_SERVERS_KEY};
use crate::store::{ConfigStore, Document};
use serde_json::Value;
use std::collections::HashSet;

/// Reconciles the registry against a desired set of entries
///
/// The desired set is any iterable of [`ServerEntry`] records; after
/// [`apply`](Reconciler::apply) the registry contains exactly those entries
/// and nothing else. Unrelated top-level keys are never touched.
///
/// # Examples
///
/// ```no_run
/// use mcpctl::reconcile::Reconciler;
/// use mcpctl::registry::ServerEntry;
/// use mcpctl::store::ConfigStore;
///
/// # fn main() -> mcpctl::error::Result<()> {
/// let store = ConfigStore::new("claude_desktop_config.json");
/// let desired = vec![ServerEntry::stdio("github", "npx", ["-y", "server-github"])];
/// let changed = Reconciler::new().apply(desired, &store)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    prune_empty_registry: bool,
}

impl Reconciler {
    /// Create a reconciler with default behavior
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete the registry key itself when the desired set leaves it empty
    ///
    /// The default keeps the key in place as an empty mapping, matching
    /// [`remove_entry`].
    pub fn prune_empty_registry(mut self, prune: bool) -> Self {
        self.prune_empty_registry = prune;
        self
    }

    /// Diff the desired set against `doc` and mutate it in place
    ///
    /// No I/O happens here; [`apply`](Reconciler::apply) wraps this between
    /// one read and at most one write. Removals run before insertions so a
    /// settings change counts as a single update. Retained entries keep
    /// their original position; new entries append in desired-set order.
    ///
    /// Returns whether the document was mutated.
    pub fn reconcile<I>(&self, doc: &mut Document, desired: I) -> bool
    where
        I: IntoIterator<Item = ServerEntry>,
    {
        let desired: Vec<ServerEntry> = desired.into_iter().collect();
        let desired_names: HashSet<&str> = desired.iter().map(|e| e.name.as_str()).collect();

        let mut changed = false;

        let current: Vec<String> = match doc.get(MCP_SERVERS_KEY) {
            Some(Value::Object(servers)) => servers.keys().cloned().collect(),
            _ => Vec::new(),
        };
        for name in current {
            if !desired_names.contains(name.as_str()) {
                changed |= remove_entry(doc, &name);
            }
        }

        for entry in &desired {
            changed |= set_entry(doc, &entry.name, &entry.settings);
        }

        if self.prune_empty_registry {
            if let Some(Value::Object(servers)) = doc.get(MCP_SERVERS_KEY) {
                if servers.is_empty() {
                    doc.shift_remove(MCP_SERVERS_KEY);
                    changed = true;
                }
            }
        }

        changed
    }

    /// Read the document, reconcile it, and write it back iff it changed
    ///
    /// Store failures propagate unchanged and are never retried; a failed
    /// read aborts before any mutation, a failed write leaves the previous
    /// file contents intact.
    ///
    /// Returns whether a write happened.
    pub fn apply<I>(&self, desired: I, store: &ConfigStore) -> Result<bool>
    where
        I: IntoIterator<Item = ServerEntry>,
    {
        let mut doc = store.read()?;
        let changed = self.reconcile(&mut doc, desired);

        if changed {
            tracing::debug!("Registry changed, writing {}", store.path().display());
            store.write(&doc)?;
        } else {
            tracing::debug!("Registry unchanged, skipping write of {}", store.path().display());
        }
        Ok(changed)
    }
}
