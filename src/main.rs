use std::process::ExitCode;

use clap::Parser;
use lidcheck::cli::{Arguments, ExitStatus};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match lidcheck::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Diagnostics go to stderr; stdout carries the console report.
fn init_logging(verbose: bool) {
    let filter = default_filter(verbose);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Progress and skipped entries are shown by default; `--verbose` adds
/// per-string detections.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,lidcheck=debug"
    } else {
        "warn,lidcheck=info"
    }
}
