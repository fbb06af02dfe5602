//! Command-line surface
//!
//! One subcommand per API operation. Mandatory schema parameters are
//! positional arguments; optional parameters are flags defaulting to the
//! schema default, so an untouched flag never reaches the wire.

pub mod args;
pub mod commands;
pub mod io;

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use args::Cli;

/// Parse arguments, set up logging and run the selected command.
///
/// Exit codes: 0 on success, 2 on invalid input (bad option values,
/// parameter type mismatches), 1 on request or output failure.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.general.verbose, cli.general.log.as_deref()) {
        eprintln!("{e:#}");
        return ExitCode::FAILURE;
    }

    match commands::execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(commands::CommandError::Invalid(e)) => {
            eprintln!("{e:#}");
            ExitCode::from(2)
        }
        Err(commands::CommandError::Failed(e)) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Install the tracing subscriber.
///
/// Repeated `-v` flags raise the default level (warn, info, debug,
/// trace); `RUST_LOG` still overrides. Logs go to stderr, or to the
/// `--log` file when given (truncated on open).
fn init_logging(verbose: u8, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to open log file '{}'", path.display()))?;
            builder.with_writer(Arc::new(file)).with_ansi(false).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}
