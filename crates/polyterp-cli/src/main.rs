//! Polyterp CLI - Command-line interface for polynomial interpolation.
//!
//! # Usage
//!
//! ```bash
//! # Interpolate inline samples and evaluate between them
//! polyterp run --xs 0.1,0.2,0.3,0.4,0.5 --ys 1.25,2.38,3.79,5.44,7.14 --at 0.25,0.6
//!
//! # Sample a built-in function and print an evaluation grid
//! polyterp run --function sin --interval 0 3 --count 7 --grid 20
//!
//! # Read a two-column CSV file and show the difference table
//! polyterp differences --file samples.csv
//!
//! # Persist a setting
//! polyterp config set precision 4
//! ```

use std::path::Path;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;
mod source;

use cli::{Cli, Commands};
use commands::config::{Config, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; the core's `log` records are bridged into tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_file = cli.config_file.as_deref();

    match cli.command {
        Commands::Run(args) => {
            let settings = load_settings(config_file)?;
            let format = cli.format.unwrap_or(settings.default_format);
            commands::run::execute(args, format, cli.quiet, &settings)?;
        }
        Commands::Differences(args) => {
            let settings = load_settings(config_file)?;
            let format = cli.format.unwrap_or(settings.default_format);
            commands::differences::execute(args, format, &settings)?;
        }
        Commands::Config(args) => commands::config::execute(args, config_file, cli.format)?,
    }

    Ok(())
}

fn load_settings(config_file: Option<&Path>) -> Result<Settings> {
    let settings = Config::load(config_file)?.settings()?;
    tracing::debug!(?settings, "loaded settings");
    Ok(settings)
}
