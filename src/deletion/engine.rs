//! Deletion engine: confirmation gate, per-file removal, failure isolation.

use std::fs;
use std::io;

use crate::error::{Result, SpaceError};
use crate::inventory::Inventory;

use super::confirm::Confirmer;

/// Why a single entry could not be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Another process holds the entry (or removal was otherwise refused).
    Occupied,
    /// The entry vanished between inventory and deletion.
    NotFound,
}

/// One entry that could not be removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub name: String,
    pub kind: FailureKind,
}

/// Outcome of one deletion pass over an inventory.
///
/// Invariant: `deleted_count + failures.len()` equals the number of
/// non-skipped entries submitted. `freed_bytes` sums the pre-deletion sizes
/// of the entries that were actually removed.
#[derive(Debug, Clone, Default)]
pub struct DeletionReport {
    pub deleted_count: u64,
    pub freed_bytes: u64,
    pub failures: Vec<DeletionFailure>,
}

/// Result of asking for confirmation and (maybe) deleting.
#[derive(Debug)]
pub enum DeletionOutcome {
    Completed(DeletionReport),
    Aborted,
}

/// Per-file event emitted while a deletion pass runs.
#[derive(Debug)]
pub enum DeleteEvent<'a> {
    Removed { name: &'a str, size_bytes: u64 },
    Failed { name: &'a str, kind: FailureKind },
}

pub const CONFIRM_PROMPT: &str = "\
You are in delete files mode: every inventoried file listed above will be permanently removed.
Once deletion starts there is no rolling back. Continue? [y/N] ";

/// Gate the deletion of `inventory` behind `confirmer`.
///
/// A decline returns [`DeletionOutcome::Aborted`] without touching any entry.
/// On confirmation every non-skipped entry is attempted exactly once; see
/// [`delete_entries`] for the isolation policy.
pub fn confirm_and_delete(
    inventory: &Inventory,
    confirmer: &mut dyn Confirmer,
    observer: impl FnMut(DeleteEvent<'_>),
) -> Result<DeletionOutcome> {
    let confirmed = confirmer
        .confirm(CONFIRM_PROMPT)
        .map_err(SpaceError::Prompt)?;

    if !confirmed {
        return Ok(DeletionOutcome::Aborted);
    }

    Ok(DeletionOutcome::Completed(delete_entries(
        inventory, observer,
    )))
}

/// Delete the inventory's non-skipped entries one at a time, in listing
/// order. A failure on one entry is recorded and the batch continues; there
/// is no mid-batch cancellation.
pub fn delete_entries(
    inventory: &Inventory,
    mut observer: impl FnMut(DeleteEvent<'_>),
) -> DeletionReport {
    let mut report = DeletionReport::default();

    for entry in inventory.included() {
        let path = inventory.root().join(&entry.name);

        match fs::remove_file(&path) {
            Ok(()) => {
                report.deleted_count += 1;
                report.freed_bytes += entry.size_bytes;
                observer(DeleteEvent::Removed {
                    name: &entry.name,
                    size_bytes: entry.size_bytes,
                });
            }
            Err(e) => {
                let kind = classify(&e);
                tracing::debug!(path = %path.display(), error = %e, "Failed to remove entry");
                observer(DeleteEvent::Failed {
                    name: &entry.name,
                    kind,
                });
                report.failures.push(DeletionFailure {
                    name: entry.name.clone(),
                    kind,
                });
            }
        }
    }

    report
}

fn classify(error: &io::Error) -> FailureKind {
    match error.kind() {
        io::ErrorKind::NotFound => FailureKind::NotFound,
        _ => FailureKind::Occupied,
    }
}
