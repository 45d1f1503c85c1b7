//! Differences command implementation.
//!
//! Prints the finite difference table of a sample source.

use anyhow::Result;
use clap::Args;
use polyterp_math::DifferenceTable;

use crate::cli::OutputFormat;
use crate::commands::config::Settings;
use crate::output::{print_differences, print_header};
use crate::source::SourceArgs;

/// Arguments for the differences command.
#[derive(Args, Debug)]
pub struct DifferencesArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Execute the differences command.
pub fn execute(args: DifferencesArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let table = args.source.load()?;
    let differences = DifferenceTable::build(&table);

    if format == OutputFormat::Table {
        print_header("Finite Differences");
    }
    print_differences(&table, &differences, format, settings.precision)
}
