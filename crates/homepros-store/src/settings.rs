//! File-backed store for the site editor's settings object.
//!
//! Settings are an opaque JSON object owned by the content editor UI; the
//! server persists and returns them without interpreting any field.

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persisted settings with an in-memory cache for reads.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    cache: RwLock<Value>,
}

impl SettingsStore {
    /// Opens the store, loading the persisted object if the file exists.
    ///
    /// A missing file starts from an empty object; an unreadable or
    /// non-JSON file does the same with a logged warning. Opening never
    /// fails — settings are cosmetic and must not block startup.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    "settings file is not valid JSON, starting from empty settings"
                );
                empty_object()
            }),
            Err(_) => empty_object(),
        };

        Self {
            path,
            cache: RwLock::new(cache),
        }
    }

    /// Current settings object.
    #[must_use]
    pub fn get(&self) -> Value {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Persists a new settings object, replacing the previous one wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if the file cannot be written; the cached
    /// value is left unchanged in that case.
    pub fn save(&self, value: Value) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SettingsError::Write {
                    path: self.path.display().to_string(),
                    source: e,
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(&value)?;
        std::fs::write(&self.path, raw).map_err(|e| SettingsError::Write {
            path: self.path.display().to_string(),
            source: e,
        })?;

        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = value;
        Ok(())
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::open(dir.path().join("settings.json"));
        assert_eq!(store.get(), json!({}));
    }

    #[test]
    fn save_then_get_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::open(dir.path().join("settings.json"));

        let settings = json!({"siteTitle": "HomePros", "theme": {"primary": "#1d4ed8"}});
        store.save(settings.clone()).expect("save");
        assert_eq!(store.get(), settings);
    }

    #[test]
    fn save_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");

        let store = SettingsStore::open(&path);
        store.save(json!({"heroHeadline": "Find a pro"})).expect("save");

        let reopened = SettingsStore::open(&path);
        assert_eq!(reopened.get()["heroHeadline"], "Find a pro");
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/data/settings.json");

        let store = SettingsStore::open(&path);
        store.save(json!({"ok": true})).expect("save");
        assert!(path.exists());
    }

    #[test]
    fn corrupt_file_starts_empty_instead_of_failing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").expect("write fixture");

        let store = SettingsStore::open(&path);
        assert_eq!(store.get(), json!({}));
    }

    #[test]
    fn save_replaces_wholesale_not_merging() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::open(dir.path().join("settings.json"));

        store
            .save(json!({"a": 1, "b": 2}))
            .expect("first save");
        store.save(json!({"b": 3})).expect("second save");

        let current = store.get();
        assert!(current.get("a").is_none(), "old keys do not survive");
        assert_eq!(current["b"], 3);
    }
}
