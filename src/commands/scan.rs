//! Scan command implementation

use std::path::Path;

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::console::ConsolePresenter;
use crate::deletion::{DeletionLog, StdinConfirmer, LOG_FILE_NAME};
use crate::error::Result;
use crate::session::{Session, SessionOptions};
use crate::stats::{StatsStore, STATS_FILE_NAME};

/// Run the scan command: inventory and report, never delete.
pub fn run(args: ScanArgs, config: &Config, state_dir: &Path) -> Result<()> {
    let skip = super::merge_skip_sets(&config.scanner.skip, &args.skip);

    tracing::info!(path = %args.path.display(), "Scanning directory");

    let mut presenter = ConsolePresenter;
    let mut confirmer = StdinConfirmer;
    let mut session = Session::new(
        &mut presenter,
        &mut confirmer,
        StatsStore::new(state_dir.join(STATS_FILE_NAME)),
        DeletionLog::new(state_dir.join(LOG_FILE_NAME)),
    );

    let options = SessionOptions {
        delete: false,
        totals_only: args.totals_only,
        log_deletions: false,
    };
    session.run(&args.path, &skip, &options)?;

    Ok(())
}
