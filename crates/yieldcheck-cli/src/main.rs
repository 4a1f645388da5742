//! yieldcheck command-line interface.
//!
//! Reads bonds, prices and a benchmark curve from a request file and reports
//! cashflows, yield-to-maturity, Z-spread and G-spread.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod request;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        output::print_error(&format!("{err:#}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, cli.format, cli.quiet),
        Commands::Cashflows(args) => commands::cashflows::execute(args, cli.format, cli.quiet),
        Commands::Config(args) => commands::config::execute(args, cli.format),
    }
}

/// Logs go to stderr so JSON on stdout stays parseable.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
