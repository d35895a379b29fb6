use anyhow::Result;
use clap::{CommandFactory, Parser};

use dirspace::cli::{Cli, Command};
use dirspace::commands;
use dirspace::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    let state_dir = cli
        .state_dir
        .clone()
        .unwrap_or_else(|| config.state_dir());

    // Dispatch to subcommand
    match cli.command {
        Command::Scan(args) => {
            tracing::info!(?args, "Starting scan");
            commands::scan::run(args, &config, &state_dir)?;
        }
        Command::Clean(args) => {
            tracing::info!(?args, "Starting clean");
            commands::clean::run(args, &config, &state_dir)?;
        }
        Command::Stats(args) => {
            commands::stats::run(args, &state_dir)?;
        }
        Command::Log(args) => {
            commands::log::run(args, &state_dir)?;
        }
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "dirspace", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirspace={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
