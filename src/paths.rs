//! Platform config file location
//!
//! Resolves the desktop application's default config file path. The core
//! never consults this implicitly: callers resolve a path here (or take one
//! from the user) and construct a [`ConfigStore`](crate::store::ConfigStore)
//! with it explicitly.

use crate::error::{McpctlError, Result};
use directories::BaseDirs;
use std::path::PathBuf;

/// Application directory name under the platform config dir
const APP_DIR: &str = "Claude";

/// Config file name inside the application directory
const CONFIG_FILE: &str = "claude_desktop_config.json";

/// Resolve the platform default path of the managed config file
///
/// - macOS: `~/Library/Application Support/Claude/claude_desktop_config.json`
/// - Linux: `~/.config/Claude/claude_desktop_config.json`
/// - Windows: `%APPDATA%\Claude\claude_desktop_config.json`
///
/// # Errors
///
/// Returns `McpctlError::Path` when the platform config directory cannot be
/// determined (no home directory).
pub fn default_config_path() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or_else(|| {
        McpctlError::Path("Unable to resolve the platform config directory".to_string())
    })?;
    Ok(base.config_dir().join(APP_DIR).join(CONFIG_FILE))
}
