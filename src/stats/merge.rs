use crate::deletion::DeletionReport;

use super::store::CumulativeStats;

/// Fold one deletion report into the cumulative totals. Pure; the caller is
/// responsible for the read-modify-write around it.
pub fn merge(previous: &CumulativeStats, report: &DeletionReport) -> CumulativeStats {
    CumulativeStats {
        total_mb: previous.total_mb + report.freed_bytes as f64 / 1_000_000.0,
        total_files: previous.total_files + report.deleted_count,
    }
}
