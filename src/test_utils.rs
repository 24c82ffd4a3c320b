//! Test utilities for mcpctl
//!
//! Common helpers for unit tests: temporary directories, test files, and
//! canonical settings values.

use crate::store::ConfigStore;
use serde_json::{json, Value};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for testing
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Create a test file with the given content
///
/// # Panics
///
/// Panics if file creation or writing fails.
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Create a ConfigStore pointed at `config.json` inside the directory
///
/// The file is not created; a fresh store reads as an empty document.
pub fn temp_store(dir: &TempDir) -> ConfigStore {
    ConfigStore::new(dir.path().join("config.json"))
}

/// Build a typical stdio settings object
pub fn stdio_settings(command: &str, args: &[&str]) -> Value {
    json!({"command": command, "args": args})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_creation() {
        let dir = temp_dir();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_create_test_file() {
        let dir = temp_dir();
        let path = create_test_file(&dir, "test.json", "{}");
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_temp_store_reads_empty() {
        let dir = temp_dir();
        let store = temp_store(&dir);
        assert!(store.read().unwrap().is_empty());
    }

    #[test]
    fn test_stdio_settings_shape() {
        let settings = stdio_settings("npx", &["-y"]);
        assert_eq!(settings, json!({"command": "npx", "args": ["-y"]}));
    }
}
