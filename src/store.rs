//! Whole-document storage for the managed config file
//!
//! `ConfigStore` owns the path to the desktop application's config file and
//! provides whole-document read/write. A missing or empty file reads as an
//! empty document; a write always replaces the full file contents.
//!
//! The store performs no caching: every operation sequence starts with a
//! fresh `read` and ends with at most one `write`.

use crate::error::{McpctlError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory representation of the managed config file
///
/// An untyped mapping from top-level key to arbitrary JSON value. Keys other
/// than the registry key are carried through read/write untouched.
pub type Document = Map<String, Value>;

/// Reads and writes the JSON document at a fixed path
///
/// The path is always supplied explicitly; platform-default resolution lives
/// in [`crate::paths`] and is never consulted here.
///
/// # Examples
///
/// ```no_run
/// use mcpctl::store::ConfigStore;
///
/// # fn main() -> mcpctl::error::Result<()> {
/// let store = ConfigStore::new("claude_desktop_config.json");
/// let doc = store.read()?;
/// store.write(&doc)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for the config file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads from and writes to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full document
    ///
    /// A missing file or a file containing only whitespace is an empty
    /// document, not an error.
    ///
    /// # Errors
    ///
    /// Returns `McpctlError::Parse` if the file contains invalid JSON or its
    /// top-level value is not an object, and `McpctlError::Io` if the file
    /// exists but cannot be read.
    pub fn read(&self) -> Result<Document> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(McpctlError::Io(e).into()),
        };

        if text.trim().is_empty() {
            return Ok(Document::new());
        }

        let value: Value = serde_json::from_str(&text)
            .map_err(|e| McpctlError::Parse(format!("{}: {}", self.path.display(), e)))?;

        match value {
            Value::Object(doc) => Ok(doc),
            other => Err(McpctlError::Parse(format!(
                "{}: expected a JSON object at the top level, found {}",
                self.path.display(),
                json_type_name(&other)
            ))
            .into()),
        }
    }

    /// Serialize and write the full document, replacing the file
    ///
    /// Output is pretty-printed with key insertion order preserved, plus a
    /// trailing newline. Parent directories are created if absent. The
    /// document is written to a sibling temp file and renamed into place so
    /// a failed write never leaves a truncated config behind.
    ///
    /// # Errors
    ///
    /// Returns `McpctlError::Io` on directory creation, write, or rename
    /// failure and `McpctlError::Serialization` if the document cannot be
    /// serialized.
    pub fn write(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(McpctlError::Io)?;
            }
        }

        let text = serde_json::to_string_pretty(doc).map_err(McpctlError::Serialization)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, format!("{text}\n")).map_err(McpctlError::Io)?;
        fs::rename(&tmp, &self.path).map_err(McpctlError::Io)?;

        tracing::debug!("Wrote {} top-level keys to {}", doc.len(), self.path.display());
        Ok(())
    }
}

/// Human-readable JSON type name for parse error messages
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
