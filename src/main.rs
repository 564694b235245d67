//! env2secret - Convert a .env file into a Kubernetes Secret manifest.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use env2secret::cli::output;
use env2secret::cli::{execute, Cli};
use env2secret::core::constants;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("env2secret=debug")
        } else {
            EnvFilter::new("env2secret=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        if e.is_missing_input() {
            output::hint("pass --env <path> to read a different file");
        }
        std::process::exit(1);
    }
}
