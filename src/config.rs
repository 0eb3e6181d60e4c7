use std::thread;

use clap::Parser;
use tracing::debug;

use crate::error::ArgError;

pub const DEFAULT_STEPS: u64 = 100_000_000;

#[derive(Parser, Debug)]
#[command(name = "pi_integral")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Approximate pi with the midpoint rule across worker threads", long_about = None)]
pub struct Cli {
    /// Number of rectangles (default: 100000000)
    #[arg(allow_hyphen_values = true)]
    pub steps: Option<String>,

    /// Number of worker threads (default: available parallelism)
    #[arg(allow_hyphen_values = true)]
    pub workers: Option<String>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

/// Validated run parameters. `workers` is the requested count, before it is
/// clamped to the step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub steps: u64,
    pub workers: usize,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self, ArgError> {
        let steps = match cli.steps.as_deref() {
            Some(token) => parse_steps(token)?,
            None => DEFAULT_STEPS,
        };
        let workers = match cli.workers.as_deref() {
            Some(token) => parse_workers(token)?,
            None => default_workers(),
        };

        debug!(
            steps,
            workers,
            default_steps = cli.steps.is_none(),
            default_workers = cli.workers.is_none(),
            ignored = ?cli.extra,
            "configuration"
        );
        Ok(Config { steps, workers })
    }
}

/// Available hardware parallelism, or 1 when it cannot be queried.
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn parse_steps(token: &str) -> Result<u64, ArgError> {
    match token.parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgError::InvalidStepCount(token.to_string())),
    }
}

fn parse_workers(token: &str) -> Result<usize, ArgError> {
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgError::InvalidWorkerCount(token.to_string())),
    }
}
