//! Append-only log of deletion batches.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::{Result, SpaceError};

use super::engine::DeletionReport;

pub const LOG_FILE_NAME: &str = "deleted_files.log";

/// Text log with one timestamped summary line per deletion batch.
pub struct DeletionLog {
    path: PathBuf,
}

impl DeletionLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one summary line for `report`.
    pub fn append(&self, report: &DeletionReport) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(
            file,
            "{} Deletion successful - {} deleted. {}MB freed up.",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            report.deleted_count,
            report.freed_bytes / 1_000_000,
        )
    }

    /// Truncate the log to empty, creating it if absent.
    pub fn clear(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SpaceError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        File::create(&self.path).map_err(|e| SpaceError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Delete the log file outright. An already-absent log counts as purged;
    /// a log held open by another process surfaces as [`SpaceError::LogOccupied`].
    pub fn purge(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                Err(SpaceError::LogOccupied(self.path.clone()))
            }
            Err(e) => Err(SpaceError::Io {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}
