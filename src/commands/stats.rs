//! Stats command implementation.

use std::path::Path;

use crate::cli::StatsArgs;
use crate::console;
use crate::error::Result;
use crate::stats::{StatsStore, STATS_FILE_NAME};

/// Print the cumulative totals. An absent record reads as all zeros.
pub fn run(_args: StatsArgs, state_dir: &Path) -> Result<()> {
    let stats = StatsStore::new(state_dir.join(STATS_FILE_NAME)).load();

    println!("{}", console::files_summary_line(stats.total_files));
    println!("{}", console::space_summary_line(stats.total_mb));

    Ok(())
}
