//! CLI entry point
//!
//! Argument parsing, dispatch and error rendering all live in the cli
//! module; this just forwards the exit code.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    skosmos_client::cli::run().await
}
