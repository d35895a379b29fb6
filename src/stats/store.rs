//! Persisted cumulative deletion statistics.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpaceError};

pub const STATS_FILE_NAME: &str = "stats.json";

/// Durable running totals across all sessions. Both fields only ever grow,
/// and only the merge-then-save path mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CumulativeStats {
    /// Total space freed, in (decimal) megabytes
    pub total_mb: f64,
    /// Total number of files deleted
    pub total_files: u64,
}

/// Reads and writes the stats record at a fixed path.
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record, healing an absent or unparseable file to the zero
    /// default. This never fails the caller.
    pub fn load(&self) -> CumulativeStats {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "No stats record, starting from zero");
                return CumulativeStats::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Corrupt stats record, resetting to zero");
                CumulativeStats::default()
            }
        }
    }

    /// Replace the record wholesale: write a sibling temp file, then rename
    /// it over the target.
    pub fn save(&self, stats: &CumulativeStats) -> Result<()> {
        let io_err = |e| SpaceError::Io {
            path: self.path.clone(),
            source: e,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_vec_pretty(stats).map_err(|e| SpaceError::Io {
            path: self.path.clone(),
            source: e.into(),
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}
