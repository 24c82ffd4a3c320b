//! mcpctl - MCP server registration CLI
//!
//! Main entry point for the mcpctl application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mcpctl::cli::{Cli, Commands};
use mcpctl::commands;
use mcpctl::paths;
use mcpctl::store::ConfigStore;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Resolve the managed config file path: CLI/env override first, then the
    // platform default.
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => paths::default_config_path()?,
    };
    tracing::debug!("Managing config file at {}", config_path.display());

    let store = ConfigStore::new(&config_path);

    // Execute command
    match cli.command {
        Commands::Enable {
            name,
            command,
            env,
            settings,
            args,
        } => {
            tracing::info!("Enabling MCP server entry: {}", name);
            let settings = commands::server::build_settings(command, args, env, settings)?;
            commands::server::run_enable(&store, &name, settings)?;
            Ok(())
        }
        Commands::Disable { name } => {
            tracing::info!("Disabling MCP server entry: {}", name);
            commands::server::run_disable(&store, &name)?;
            Ok(())
        }
        Commands::List { json } => {
            commands::list::run_list(&store, json)?;
            Ok(())
        }
        Commands::Apply {
            manifest,
            prune_registry,
            dry_run,
        } => {
            tracing::info!("Applying manifest: {}", manifest.display());
            if dry_run {
                tracing::debug!("Dry run: the config file will not be written");
            }
            commands::apply::run_apply(&store, &manifest, prune_registry, dry_run)?;
            Ok(())
        }
        Commands::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so stdout stays machine-readable (`list --json`,
/// `path`).
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "mcpctl=debug" } else { "mcpctl=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
