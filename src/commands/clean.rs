//! Clean command implementation.

use std::path::Path;

use crate::cli::CleanArgs;
use crate::config::Config;
use crate::console::ConsolePresenter;
use crate::deletion::{AssumeYes, Confirmer, DeletionLog, StdinConfirmer, LOG_FILE_NAME};
use crate::error::Result;
use crate::session::{Session, SessionOptions};
use crate::stats::{StatsStore, STATS_FILE_NAME};

/// Run the clean command: inventory, confirm, delete, merge stats.
pub fn run(args: CleanArgs, config: &Config, state_dir: &Path) -> Result<()> {
    let skip = super::merge_skip_sets(&config.scanner.skip, &args.skip);

    tracing::info!(path = %args.path.display(), "Cleaning directory");

    let mut presenter = ConsolePresenter;
    let mut stdin_confirmer = StdinConfirmer;
    let mut assume_yes = AssumeYes;
    let confirmer: &mut dyn Confirmer = if args.yes {
        &mut assume_yes
    } else {
        &mut stdin_confirmer
    };

    let mut session = Session::new(
        &mut presenter,
        confirmer,
        StatsStore::new(state_dir.join(STATS_FILE_NAME)),
        DeletionLog::new(state_dir.join(LOG_FILE_NAME)),
    );

    let options = SessionOptions {
        delete: true,
        totals_only: args.totals_only,
        log_deletions: config.deletion.log_deletions && !args.no_log,
    };
    let summary = session.run(&args.path, &skip, &options)?;

    if let Some(report) = &summary.report {
        if !report.failures.is_empty() {
            std::process::exit(5); // Partial failure
        }
    }

    Ok(())
}
