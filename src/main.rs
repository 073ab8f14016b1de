//! CLI entry point for the screenshot cognitive load analyzer

use clap::Parser;
use std::process::ExitCode;
use uiload::io::cli::{Cli, ReportRunner, failure_message};

// Allow print for the rendered report and the failure message, which are the
// program's output
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    match ReportRunner::new(cli).run() {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", failure_message(&error));
            ExitCode::FAILURE
        }
    }
}
