//! Command-line interface definition for mcpctl
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for enabling, disabling, listing, and reconciling
//! MCP server registrations.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mcpctl - MCP server registration CLI
///
/// Register named command+arguments launch specs in a desktop application's
/// JSON config file, with idempotent enable/disable/apply operations.
#[derive(Parser, Debug, Clone)]
#[command(name = "mcpctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the managed config file (defaults to the platform location)
    #[arg(short, long, env = "MCPCTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for mcpctl
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Register or update an MCP server entry
    Enable {
        /// Entry name, unique within the registry
        name: String,

        /// Launcher command (e.g. npx)
        #[arg(long)]
        command: Option<String>,

        /// KEY=VALUE environment entries passed to the launcher
        #[arg(short, long, value_name = "KEY=VALUE")]
        env: Vec<String>,

        /// Raw JSON settings object (alternative to --command/--env/args)
        #[arg(long, conflicts_with_all = ["command", "env", "args"])]
        settings: Option<String>,

        /// Launcher arguments, after `--`
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Remove an MCP server entry
    Disable {
        /// Entry name to remove
        name: String,
    },

    /// List registered MCP servers
    List {
        /// Emit the registry as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Reconcile the config against a manifest of desired servers
    Apply {
        /// Path to the manifest file (YAML or JSON)
        manifest: PathBuf,

        /// Delete the registry key when the desired set leaves it empty
        #[arg(long)]
        prune_registry: bool,

        /// Compute and report changes without writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the resolved config file path
    Path,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
