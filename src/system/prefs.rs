// Preference store - persisted key/value preferences (e.g. "lang")
//
// The UI core only depends on the read-only trait, so tests inject an
// in-memory store instead of touching the filesystem.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, StartuiError};

/// Read-only preference provider injected into the UI.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedPreferences {
    version: u32,
    #[serde(default)]
    values: HashMap<String, String>,
}

impl Default for PersistedPreferences {
    fn default() -> Self {
        Self {
            version: FilePreferenceStore::PREFS_VERSION,
            values: HashMap::new(),
        }
    }
}

/// TOML-backed store under the user config directory.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    prefs: PersistedPreferences,
}

impl FilePreferenceStore {
    const PREFS_VERSION: u32 = 1;

    /// Load from the default location. A missing file yields an empty
    /// store; an unreadable or malformed file is an error.
    pub fn load_default() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| StartuiError::Prefs("no user config directory".to_string()))?;
        Self::load(base.join("startui").join("preferences.toml"))
    }

    pub fn load(path: PathBuf) -> Result<Self> {
        let prefs = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            toml::from_str(&raw)
                .map_err(|err| StartuiError::Prefs(format!("{}: {}", path.display(), err)))?
        } else {
            PersistedPreferences::default()
        };
        Ok(Self { path, prefs })
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.prefs.values.insert(key.into(), value.into());
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(&self.prefs)
            .map_err(|err| StartuiError::Prefs(err.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.values.get(key).cloned()
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::default();
        store.values.insert(key.into(), value.into());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::load(dir.path().join("preferences.toml")).unwrap();
        assert_eq!(store.get("lang"), None);
    }

    #[test]
    fn test_set_save_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = FilePreferenceStore::load(path.clone()).unwrap();
        store.set("lang", "en");
        store.save().unwrap();

        let reloaded = FilePreferenceStore::load(path).unwrap();
        assert_eq!(reloaded.get("lang"), Some("en".to_string()));
        assert_eq!(reloaded.get("theme"), None);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        assert!(FilePreferenceStore::load(path).is_err());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryPreferenceStore::with("lang", "zh");
        assert_eq!(store.get("lang"), Some("zh".to_string()));
        assert_eq!(store.get("other"), None);
    }
}
