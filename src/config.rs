use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the stats record and deletion log live (defaults to the state dir)
    pub state_dir: Option<PathBuf>,
    pub scanner: ScannerConfig,
    pub deletion: DeletionConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Exact entry names always excluded from accounting and deletion
    pub skip: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletionConfig {
    /// Append a summary line to the deletion log after each deletion pass
    pub log_deletions: bool,
}

impl Default for DeletionConfig {
    fn default() -> Self {
        Self {
            log_deletions: true,
        }
    }
}

impl Config {
    /// Load from an explicit path (which must exist), or from the default
    /// location (which may be absent, yielding defaults).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::read(p),
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::read(&p),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dirspace/config.toml"))
    }

    /// Resolve the directory holding stats.json and deleted_files.log.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(default_state_dir)
    }
}

/// `$XDG_STATE_HOME/dirspace`, falling back to `~/.local/state/dirspace`.
pub fn default_state_dir() -> PathBuf {
    let base = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(".local/state"))
                .unwrap_or_else(|| PathBuf::from("/tmp"))
        });

    base.join("dirspace")
}
