/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `server` — Register or remove a single entry (`enable` / `disable`)
- `list`   — Print the current registry
- `apply`  — Reconcile the registry against a manifest

These handlers are intentionally small and use the library components:
store, registry, reconcile, and manifest.
*/

pub mod apply;
pub mod list;
pub mod server;
