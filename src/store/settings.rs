use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A whole-file JSON key-value settings store. Every write replaces the
/// full file contents, so a slot is always one atomic put of its value.
pub(crate) struct Settings {
    path: PathBuf,
}

impl Settings {
    pub(crate) fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Read the value stored under `key`. An absent file or absent key is
    /// `None`; an unreadable or unparsable file is an error for the caller
    /// to downgrade as its contract requires.
    pub(crate) fn get(&self, key: &str) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings: {}", self.path.display()))?;
        let root: Map<String, Value> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed settings file: {}", self.path.display()))?;
        Ok(root.get(key).cloned())
    }

    /// Overwrite the value stored under `key`, preserving other keys.
    /// A file that fails to parse is replaced wholesale.
    pub(crate) fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut root = self.read_root();
        root.insert(key.to_string(), value);
        let serialized = serde_json::to_string(&Value::Object(root))?;
        std::fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings: {}", self.path.display()))?;
        Ok(())
    }

    fn read_root(&self) -> Map<String, Value> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}
