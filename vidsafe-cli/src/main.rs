use std::io::IsTerminal;

use clap::Parser;
use safe_name::VIDEO_EXTENSIONS;
use tracing::{error, info};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

mod cli;
mod config;
mod error;
mod output;
mod processor;

use cli::CliArgs;
use config::RenameConfig;
use error::AppError;
use output::OutputManager;

fn main() {
    if let Err(e) = bootstrap() {
        eprintln!("Error: {e}");
        // Log the full error for debugging
        error!(error = ?e, "Application failed");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<(), AppError> {
    // Parse command-line arguments
    let args = CliArgs::parse();

    init_logging(args.verbose)?;

    let output = OutputManager::new(std::io::stdout().is_terminal());

    // Always the working directory, always the same extensions
    let config = RenameConfig::builder()
        .dir(".")
        .extensions(VIDEO_EXTENSIONS.iter().copied())
        .build();

    println!("{}", output.format_banner());

    let summary = processor::process_directory(&config, |outcome| {
        println!("{}", output.format_outcome(outcome));
    })?;

    println!("{}", output.format_footer(&summary));

    info!(
        renamed = summary.renamed,
        already_safe = summary.already_safe,
        skipped = summary.skipped,
        failed = summary.failed,
        "Processed {} candidate file{}",
        summary.total(),
        if summary.total() == 1 { "" } else { "s" }
    );

    Ok(())
}

fn init_logging(verbose: bool) -> Result<(), AppError> {
    // stdout is reserved for the status lines
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .map_err(|e| AppError::Initialization(e.to_string()))
}
