//! Desired-set manifest parsing
//!
//! A manifest declares the complete set of MCP servers the user wants
//! registered. Its shape mirrors the registry itself:
//!
//! ```yaml
//! mcpServers:
//!   github:
//!     command: npx
//!     args: ["-y", "@modelcontextprotocol/server-github"]
//! ```
//!
//! Entry order in the manifest is the desired registry order.

use crate::error::{McpctlError, Result};
use crate::registry::ServerEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Parsed desired-set manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Desired registry: entry name to opaque settings object
    #[serde(rename = "mcpServers")]
    pub mcp_servers: Map<String, Value>,
}

impl Manifest {
    /// Parse a manifest from a file
    ///
    /// Supports `.yaml`, `.yml`, and `.json` extensions.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            McpctlError::Config(format!("Failed to read manifest {}: {}", path.display(), e))
        })?;

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| McpctlError::Config("Manifest file has no extension".to_string()))?;

        match extension {
            "yaml" | "yml" => Self::from_yaml(&content),
            "json" => Self::from_json(&content),
            _ => Err(McpctlError::Config(format!(
                "Unsupported manifest format: {}",
                extension
            ))
            .into()),
        }
    }

    /// Parse YAML manifest content
    pub fn from_yaml(content: &str) -> Result<Self> {
        let manifest: Manifest = serde_yaml::from_str(content).map_err(McpctlError::Yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse JSON manifest content
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest: Manifest =
            serde_json::from_str(content).map_err(McpctlError::Serialization)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check structural requirements
    ///
    /// Entry names must be non-empty and settings must be JSON objects.
    /// Anything deeper is deliberately not checked; settings are opaque.
    pub fn validate(&self) -> Result<()> {
        for (name, settings) in &self.mcp_servers {
            if name.trim().is_empty() {
                return Err(
                    McpctlError::Config("Manifest entry names must be non-empty".to_string())
                        .into(),
                );
            }
            if !settings.is_object() {
                return Err(McpctlError::Config(format!(
                    "Settings for '{}' must be a JSON object",
                    name
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Desired entries in manifest order
    pub fn entries(&self) -> Vec<ServerEntry> {
        self.mcp_servers
            .iter()
            .map(|(name, settings)| ServerEntry::new(name.clone(), settings.clone()))
            .collect()
    }

    /// Number of desired entries
    pub fn entry_count(&self) -> usize {
        self.mcp_servers.len()
    }

    /// Whether the manifest declares no entries at all
    pub fn is_empty(&self) -> bool {
        self.mcp_servers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_file, temp_dir};
    use serde_json::json;

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
mcpServers:
  github:
    command: npx
    args: ["-y", "@modelcontextprotocol/server-github"]
  filesystem:
    command: node
    args: ["fs-server.js"]
"#;
        let manifest = Manifest::from_yaml(yaml).unwrap();
        assert_eq!(manifest.entry_count(), 2);

        let entries = manifest.entries();
        assert_eq!(entries[0].name, "github");
        assert_eq!(entries[0].settings["command"], "npx");
        assert_eq!(entries[1].name, "filesystem");
    }

    #[test]
    fn test_from_json() {
        let json_text = r#"{"mcpServers": {"github": {"command": "npx", "args": []}}}"#;
        let manifest = Manifest::from_json(json_text).unwrap();
        assert_eq!(manifest.entry_count(), 1);
        assert_eq!(manifest.entries()[0].name, "github");
    }

    #[test]
    fn test_entries_preserve_manifest_order() {
        let json_text = r#"{"mcpServers": {"zeta": {}, "alpha": {}, "mid": {}}}"#;
        let manifest = Manifest::from_json(json_text).unwrap();
        let names: Vec<_> = manifest.entries().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_file_dispatches_on_extension() {
        let dir = temp_dir();
        let yaml_path = create_test_file(&dir, "servers.yaml", "mcpServers: {}\n");
        let json_path = create_test_file(&dir, "servers.json", r#"{"mcpServers": {}}"#);

        assert!(Manifest::from_file(&yaml_path).unwrap().is_empty());
        assert!(Manifest::from_file(&json_path).unwrap().is_empty());
    }

    #[test]
    fn test_from_file_rejects_unknown_extension() {
        let dir = temp_dir();
        let path = create_test_file(&dir, "servers.toml", "mcpServers = {}\n");
        let err = Manifest::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported manifest format"));
    }

    #[test]
    fn test_from_file_missing_file_is_config_error() {
        let dir = temp_dir();
        let err = Manifest::from_file(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest"));
    }

    #[test]
    fn test_missing_registry_key_is_rejected() {
        assert!(Manifest::from_json(r#"{"servers": {}}"#).is_err());
        assert!(Manifest::from_yaml("servers: {}\n").is_err());
    }

    #[test]
    fn test_non_object_settings_are_rejected() {
        let err = Manifest::from_json(r#"{"mcpServers": {"bad": "npx"}}"#).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn test_empty_entry_name_is_rejected() {
        let err = Manifest::from_json(r#"{"mcpServers": {"  ": {}}}"#).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn test_opaque_settings_survive_yaml_round_trip() {
        let yaml = r#"
mcpServers:
  remote:
    command: npx
    args: ["-y", "mcp-remote", "https://my-mcp-server.com/sse"]
    env:
      API_KEY: secret
    timeout: 30
"#;
        let manifest = Manifest::from_yaml(yaml).unwrap();
        let settings = &manifest.entries()[0].settings;
        assert_eq!(settings["env"], json!({"API_KEY": "secret"}));
        assert_eq!(settings["timeout"], json!(30));
    }
}
