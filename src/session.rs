//! One invocation of the scan -> confirm -> delete -> merge workflow.

use std::collections::BTreeSet;
use std::path::Path;

use crate::console::{self, Presenter};
use crate::deletion::{
    confirm_and_delete, Confirmer, DeleteEvent, DeletionLog, DeletionOutcome, DeletionReport,
};
use crate::error::Result;
use crate::inventory;
use crate::stats::{merge, CumulativeStats, StatsStore};

/// Knobs for one session run.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Run the deletion pass after scanning
    pub delete: bool,
    /// Suppress per-entry lines; the total is always rendered
    pub totals_only: bool,
    /// Append a summary line to the deletion log after a deletion pass
    pub log_deletions: bool,
}

/// What one session did.
#[derive(Debug)]
pub struct SessionSummary {
    pub total_bytes: u64,
    pub entry_count: usize,
    /// Present when a deletion pass ran to completion
    pub report: Option<DeletionReport>,
    /// True when the confirmation gate declined
    pub aborted: bool,
    /// Cumulative totals after merging, when stats were updated
    pub stats: Option<CumulativeStats>,
}

/// Composes scanner, deletion engine and stats store for one invocation.
/// The inventory and report live only for the duration of [`Session::run`];
/// the stats record is the only thing that survives it.
pub struct Session<'a> {
    presenter: &'a mut dyn Presenter,
    confirmer: &'a mut dyn Confirmer,
    stats_store: StatsStore,
    log: DeletionLog,
}

impl<'a> Session<'a> {
    pub fn new(
        presenter: &'a mut dyn Presenter,
        confirmer: &'a mut dyn Confirmer,
        stats_store: StatsStore,
        log: DeletionLog,
    ) -> Self {
        Self {
            presenter,
            confirmer,
            stats_store,
            log,
        }
    }

    pub fn run(
        &mut self,
        dir: &Path,
        skip: &BTreeSet<String>,
        options: &SessionOptions,
    ) -> Result<SessionSummary> {
        let skip = self.extend_with_bookkeeping(skip);

        let presenter = &mut *self.presenter;
        let inventory = inventory::scan_with_observer(dir, &skip, |entry| {
            if !options.totals_only {
                if entry.skipped {
                    presenter.line(&console::skipped_line(entry));
                } else {
                    presenter.line(&console::entry_line(entry));
                }
            }
        })?;

        self.presenter
            .line(&console::total_line(inventory.total_bytes()));

        let mut summary = SessionSummary {
            total_bytes: inventory.total_bytes(),
            entry_count: inventory.entries().len(),
            report: None,
            aborted: false,
            stats: None,
        };

        if !options.delete {
            return Ok(summary);
        }

        let root = inventory.root().to_path_buf();
        let presenter = &mut *self.presenter;
        let outcome = confirm_and_delete(&inventory, &mut *self.confirmer, |event| match event {
            DeleteEvent::Removed { name, .. } => {
                if !options.totals_only {
                    presenter.line(&console::removed_line(name, &root));
                }
            }
            DeleteEvent::Failed { name, kind } => {
                presenter.line(&console::failure_line(name, kind));
            }
        })?;

        let report = match outcome {
            DeletionOutcome::Aborted => {
                self.presenter.line("Deletion aborted.");
                summary.aborted = true;
                return Ok(summary);
            }
            DeletionOutcome::Completed(report) => report,
        };

        if options.log_deletions {
            if let Err(e) = self.log.append(&report) {
                tracing::warn!(path = %self.log.path().display(), error = %e, "Failed to append deletion log");
            }
        }

        let previous = self.stats_store.load();
        let merged = merge(&previous, &report);
        self.stats_store.save(&merged)?;

        self.presenter
            .line(&console::files_summary_line(merged.total_files));
        self.presenter
            .line(&console::space_summary_line(merged.total_mb));

        summary.report = Some(report);
        summary.stats = Some(merged);
        Ok(summary)
    }

    /// The tool must never delete its own state: the stats record and the
    /// deletion log are added to the skip set by name, each individually.
    fn extend_with_bookkeeping(&self, skip: &BTreeSet<String>) -> BTreeSet<String> {
        let mut skip = skip.clone();
        for path in [self.stats_store.path(), self.log.path()] {
            if let Some(name) = path.file_name() {
                skip.insert(name.to_string_lossy().into_owned());
            }
        }
        skip
    }
}
