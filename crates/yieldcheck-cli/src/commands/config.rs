//! Config command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::output::print_json;
use crate::request::load_config;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Calculation config (TOML) to load and validate
    #[arg(short, long, env = "YIELDCHECK_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    match format {
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Table => print!("{}", toml::to_string_pretty(&config)?),
    }
    Ok(())
}
