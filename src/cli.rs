use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dirspace - A directory space accounting and cleanup utility
#[derive(Parser, Debug)]
#[command(name = "dirspace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the stats record and deletion log
    #[arg(long, global = true, value_name = "PATH")]
    pub state_dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inventory a directory and report per-file and total sizes
    Scan(ScanArgs),

    /// Inventory a directory, then delete its files after confirmation
    Clean(CleanArgs),

    /// Show cumulative deletion totals
    Stats(StatsArgs),

    /// Wipe or remove the deletion log
    Log(LogArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory to inventory
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Entry names to skip (comma-separated, exact matches)
    #[arg(short, long, value_delimiter = ',', value_name = "NAMES")]
    pub skip: Vec<String>,

    /// Only print the total, not each entry
    #[arg(long)]
    pub totals_only: bool,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Directory to inventory and clean
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Entry names to skip (comma-separated, exact matches)
    #[arg(short, long, value_delimiter = ',', value_name = "NAMES")]
    pub skip: Vec<String>,

    /// Only print the total, not each entry
    #[arg(long)]
    pub totals_only: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Do not append this batch to the deletion log
    #[arg(long)]
    pub no_log: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {}

#[derive(Args, Debug)]
pub struct LogArgs {
    /// Delete the log file instead of truncating it
    #[arg(long)]
    pub purge: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
