//! Diff configuration
//!
//! Stored as TOML under the platform config directory
//! (`~/.config/recite/config.toml` on Linux). A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DiffError, Result};
use crate::models::DiffOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Unmatched content after the last match counts as not yet read
    pub tail_unmatched_as_normal: bool,

    /// Match characters by shared pinyin reading, not only identity
    pub homophones: bool,

    /// Reading cache size before it is cleared; omitted means unbounded
    pub reading_cache_capacity: Option<usize>,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            tail_unmatched_as_normal: false,
            homophones: true,
            reading_cache_capacity: None,
        }
    }
}

impl DiffConfig {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: DiffConfig = toml::from_str(&contents)
            .map_err(|e| DiffError::config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Write as pretty TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DiffError::config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.reading_cache_capacity == Some(0) {
            return Err(DiffError::config(
                "reading_cache_capacity must be positive (omit it for no limit)",
            ));
        }
        Ok(())
    }

    pub fn options(&self) -> DiffOptions {
        DiffOptions {
            tail_unmatched_as_normal: self.tail_unmatched_as_normal,
        }
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("recite").join("config.toml"))
    }
}
