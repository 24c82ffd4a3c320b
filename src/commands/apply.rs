//! Apply command handler
//!
//! Reconciles the config file against a manifest: after a successful apply
//! the registry contains exactly the manifest's entries. With `--dry-run`
//! the diff is computed and reported but nothing is written.

use crate::error::Result;
use crate::manifest::Manifest;
use crate::reconcile::Reconciler;
use crate::store::ConfigStore;
use colored::Colorize;
use std::path::Path;

/// Reconcile the registry against the manifest at `manifest_path`
///
/// Returns whether the document changed (with `dry_run`, whether it would
/// have changed).
pub fn run_apply(
    store: &ConfigStore,
    manifest_path: &Path,
    prune_registry: bool,
    dry_run: bool,
) -> Result<bool> {
    let manifest = Manifest::from_file(manifest_path)?;
    tracing::info!(
        "Loaded manifest {} with {} entries",
        manifest_path.display(),
        manifest.entry_count()
    );

    let reconciler = Reconciler::new().prune_empty_registry(prune_registry);

    if dry_run {
        let mut doc = store.read()?;
        let changed = reconciler.reconcile(&mut doc, manifest.entries());
        if changed {
            println!(
                "{}",
                format!("Dry run: {} is out of sync with the manifest", store.path().display())
                    .yellow()
            );
        } else {
            println!("Dry run: {} already matches the manifest", store.path().display());
        }
        return Ok(changed);
    }

    let changed = reconciler.apply(manifest.entries(), store)?;
    if changed {
        println!(
            "{}",
            format!(
                "Applied {} ({} entries) to {}",
                manifest_path.display(),
                manifest.entry_count(),
                store.path().display()
            )
            .green()
        );
    } else {
        println!("{} already matches the manifest", store.path().display());
    }
    Ok(changed)
}
