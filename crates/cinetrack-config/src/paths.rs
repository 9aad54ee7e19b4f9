use anyhow::Result;
use dirs;
use std::path::{Path, PathBuf};

/// Get the container base path from environment variable, defaulting to "/app"
pub fn container_base_path() -> PathBuf {
    std::env::var("CINETRACK_BASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/app"))
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("cinetrack");

        Ok(Self {
            config_dir: base_dir.clone(),
            data_dir: base_dir.join("data"),
        })
    }

    pub fn from_container_env() -> Self {
        let base = container_base_path();
        // In containers, config files sit at the base path with data in a subdir
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    /// Root everything under an arbitrary directory. Used by tests.
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding one JSON file per persisted named list.
    pub fn lists_dir(&self) -> PathBuf {
        self.data_dir.join("lists")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(self.lists_dir())?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        // A pre-existing container base directory indicates we run inside one
        let base = container_base_path();
        if base.exists() {
            return Self::from_container_env();
        }

        Self::new().unwrap_or_else(|_| Self::from_container_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rooted_layout() {
        let dir = tempdir().unwrap();
        let paths = PathManager::rooted_at(dir.path());

        assert_eq!(paths.config_file(), dir.path().join("config.toml"));
        assert_eq!(paths.lists_dir(), dir.path().join("data").join("lists"));
    }

    #[test]
    fn test_ensure_directories_creates_tree() {
        let dir = tempdir().unwrap();
        let paths = PathManager::rooted_at(dir.path().join("nested"));

        paths.ensure_directories().unwrap();
        assert!(paths.lists_dir().is_dir());
        assert!(paths.data_dir().is_dir());
    }
}
