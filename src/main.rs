mod config;
mod error;
mod integrate;
mod partition;
mod report;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::{Cli, Config};

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;

    let estimate = integrate::estimate_pi(config.steps, config.workers)
        .context("failed to start worker threads")?;

    let stdout = io::stdout();
    report::write_report(&mut stdout.lock(), &estimate).context("failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(1)
        }
    }
}
