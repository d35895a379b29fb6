//! Presentation seam and line formatting for session output.

use crate::deletion::FailureKind;
use crate::inventory::FileEntry;

/// Output sink for user-facing lines. Kept to a single operation so sessions
/// can be exercised without a terminal.
pub trait Presenter {
    fn line(&mut self, line: &str);
}

/// Default presenter: plain stdout.
pub struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Labels of the final cumulative summary; the column they align to.
const SUMMARY_COLUMN: usize = 40;

pub fn entry_line(entry: &FileEntry) -> String {
    format!("{} takes up {}KB", entry.name, entry.size_bytes as f64 / 1000.0)
}

pub fn skipped_line(entry: &FileEntry) -> String {
    format!("Skipped unwanted file, {}", entry.name)
}

pub fn total_line(total_bytes: u64) -> String {
    format!("{:.2}MB in current folder.", total_bytes as f64 / 1_000_000.0)
}

pub fn removed_line(name: &str, root: &std::path::Path) -> String {
    format!("Deletion successful: \"{}\" was removed from {}", name, root.display())
}

pub fn failure_line(name: &str, kind: FailureKind) -> String {
    match kind {
        FailureKind::Occupied => format!(
            "Error - \"{name}\" could not be removed because another process is occupying it."
        ),
        FailureKind::NotFound => {
            format!("Error - \"{name}\" no longer exists, nothing to remove.")
        }
    }
}

/// `<label>: <value>` with the value right-aligned so the line ends at a
/// fixed column regardless of label length.
pub fn aligned(label: &str, value: &str) -> String {
    let width = SUMMARY_COLUMN.saturating_sub(label.len());
    format!("{label}: {value:>width$}")
}

/// Group a non-negative integer with thousands separators: 1234567 -> "1,234,567".
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

pub fn files_summary_line(total_files: u64) -> String {
    aligned(
        "Total files deleted",
        &format!("{} files", group_thousands(total_files)),
    )
}

pub fn space_summary_line(total_mb: f64) -> String {
    aligned(
        "Total space cleared",
        &format!("{}MB", group_thousands(total_mb as u64)),
    )
}
