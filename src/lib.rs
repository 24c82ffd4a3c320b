//! mcpctl - MCP server registration management library
//!
//! This library manages the JSON config file a desktop application uses to
//! register MCP servers (named command+arguments launch specs), providing
//! idempotent enable/disable/apply operations over that file.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `store`: whole-document read/write of the managed config file
//! - `registry`: pure add/update/remove operations over the entry registry
//! - `reconcile`: desired-set reconciliation with at-most-one write
//! - `manifest`: desired-set manifest parsing (YAML/JSON)
//! - `paths`: platform default config file location
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//! - `commands`: CLI command handlers
//!
//! # Example
//!
//! ```no_run
//! use mcpctl::{ConfigStore, Reconciler, ServerEntry};
//!
//! fn main() -> anyhow::Result<()> {
//!     let store = ConfigStore::new("claude_desktop_config.json");
//!     let desired = vec![
//!         ServerEntry::stdio("github", "npx", ["-y", "@modelcontextprotocol/server-github"]),
//!     ];
//!     let changed = Reconciler::new().apply(desired, &store)?;
//!     println!("changed: {changed}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod manifest;
pub mod paths;
pub mod reconcile;
pub mod registry;
pub mod store;

// Re-export commonly used types
pub use error::{McpctlError, Result};
pub use manifest::Manifest;
pub use reconcile::Reconciler;
pub use registry::{remove_entry, set_entry, ServerEntry, MCP_SERVERS_KEY};
pub use store::{ConfigStore, Document};

#[cfg(test)]
pub mod test_utils;
