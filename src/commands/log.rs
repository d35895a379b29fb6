//! Log command implementation.

use std::path::Path;

use crate::cli::LogArgs;
use crate::deletion::{DeletionLog, LOG_FILE_NAME};
use crate::error::Result;

/// Wipe the deletion log, or with `--purge` remove the file entirely.
pub fn run(args: LogArgs, state_dir: &Path) -> Result<()> {
    let log = DeletionLog::new(state_dir.join(LOG_FILE_NAME));

    if args.purge {
        log.purge()?;
        println!("{} was successfully removed.", log.path().display());
    } else {
        log.clear()?;
        println!("Wiped log file");
    }

    Ok(())
}
