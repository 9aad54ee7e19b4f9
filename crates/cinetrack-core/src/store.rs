use anyhow::Result;
use cinetrack_models::Movie;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Durable key-value storage for named movie lists. Each list is one
/// JSON file (`<key>.json`, a serialized array) under the store
/// directory. Reads never fail: a missing, unreadable, or corrupt file
/// degrades to an empty list so callers keep working without
/// persistence.
#[derive(Clone)]
pub struct ListStore {
    dir: PathBuf,
}

impl ListStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            warn!("Could not create list directory {}: {}", dir.display(), e);
        }
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn list_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn read(&self, key: &str) -> Vec<Movie> {
        let path = self.list_path(key);

        if !path.exists() {
            debug!(key, "no persisted list, starting empty");
            return Vec::new();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<Movie>>(&content) {
                Ok(list) => {
                    debug!(key, items = list.len(), "loaded persisted list");
                    list
                }
                Err(e) => {
                    warn!(
                        "List file corruption detected for {}: {}. Deleting corrupted file.",
                        key, e
                    );
                    if let Err(rm_err) = std::fs::remove_file(&path) {
                        warn!("Failed to delete corrupted list file: {}", rm_err);
                    }
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Failed to read list file for {}: {}", key, e);
                Vec::new()
            }
        }
    }

    /// Replaces the persisted value for `key`. Callers treat failures as
    /// best-effort: the in-memory state stays authoritative for the
    /// session.
    pub fn write(&self, key: &str, list: &[Movie]) -> Result<()> {
        let path = self.list_path(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(list)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    pub fn clear(&self, key: &str) -> Result<()> {
        let path = self.list_path(key);
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
