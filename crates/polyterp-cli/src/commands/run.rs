//! Run command implementation.
//!
//! Interpolates a sample source with every selected strategy, then prints the
//! samples, their difference table and each strategy's outcome.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::{builder::Builder, settings::Style, Tabled};

use polyterp_math::{
    Interpolation, InterpolationConfig, InterpolationResult, ResultEntity, Strategy,
};

use crate::cli::OutputFormat;
use crate::commands::config::Settings;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_value, print_differences, print_header, print_info, print_output, print_warning,
};
use crate::source::{linspace, parse_values, SourceArgs};

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Points to evaluate every function at (comma-separated)
    #[arg(long, allow_hyphen_values = true)]
    pub at: Option<String>,

    /// Print an evaluation grid of N points spanning the samples and --at points
    #[arg(long, value_name = "N")]
    pub grid: Option<usize>,

    /// Strategies to run, in order (comma-separated; default: lagrange,newton,gauss)
    #[arg(long, value_delimiter = ',')]
    pub strategies: Vec<String>,

    /// Spacing tolerance, overriding the configured one
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Run the strategies in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// One function value.
#[derive(Debug, Serialize)]
struct Evaluation {
    x: f64,
    y: f64,
    extrapolated: bool,
}

/// Outcome of one strategy.
#[derive(Debug, Serialize)]
struct StrategyReport {
    name: String,
    status: &'static str,
    values: Vec<Evaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StrategyReport {
    fn new(entity: &ResultEntity, at: &[f64]) -> Self {
        match entity {
            ResultEntity::Success { name, function } => Self {
                name: name.clone(),
                status: "success",
                values: at
                    .iter()
                    .map(|&x| Evaluation {
                        x,
                        y: function.at(x),
                        extrapolated: function.extrapolates(x),
                    })
                    .collect(),
                error: None,
            },
            ResultEntity::Error { name, error } => Self {
                name: name.clone(),
                status: "error",
                values: Vec::new(),
                error: Some(error.to_string()),
            },
        }
    }
}

/// Flat CSV row: one per strategy and evaluation point.
#[derive(Debug, Serialize)]
struct EvaluationRow<'a> {
    strategy: &'a str,
    status: &'static str,
    kind: &'static str,
    x: Option<f64>,
    y: Option<f64>,
    extrapolated: Option<bool>,
    error: Option<&'a str>,
}

#[derive(Tabled, Serialize)]
struct SampleRow {
    #[tabled(rename = "x")]
    x: String,
    #[tabled(rename = "y")]
    y: String,
}

/// Function values over an evaluation grid.
#[derive(Debug, Serialize)]
struct Grid {
    x: Vec<f64>,
    functions: Vec<GridColumn>,
}

#[derive(Debug, Serialize)]
struct GridColumn {
    name: String,
    values: Vec<f64>,
}

/// Execute the run command.
pub fn execute(args: RunArgs, format: OutputFormat, quiet: bool, settings: &Settings) -> Result<()> {
    let table = args.source.load()?;
    let at = match args.at.as_deref() {
        Some(list) => parse_values(list)?,
        None => Vec::new(),
    };
    let strategies = parse_strategies(&args.strategies)?;

    let result = Interpolation::with_config(InterpolationConfig {
        spacing_tolerance: args.tolerance.unwrap_or(settings.spacing_tolerance),
        strategies,
        parallel: args.parallel || settings.parallel,
    })
    .run(table)?;

    let reports: Vec<StrategyReport> = result
        .entities()
        .iter()
        .map(|e| StrategyReport::new(e, &at))
        .collect();
    let grid = match args.grid {
        Some(n) => Some(evaluate_grid(&result, &at, n)?),
        None => None,
    };

    tracing::debug!(
        succeeded = result.functions().count(),
        total = reports.len(),
        "run finished"
    );

    match format {
        OutputFormat::Table => {
            print_tables(&result, &reports, grid.as_ref(), quiet, settings.precision)
        }
        OutputFormat::Json => {
            let mut output = serde_json::json!({ "results": reports });
            if !quiet {
                let samples: Vec<_> = result
                    .table()
                    .points()
                    .map(|(x, y)| serde_json::json!({ "x": x, "y": y }))
                    .collect();
                let differences: Vec<_> = (0..result.table().len())
                    .map(|i| result.differences().row(i))
                    .collect();
                output["samples"] = serde_json::json!(samples);
                output["differences"] = serde_json::json!(differences);
            }
            if let Some(grid) = &grid {
                output["grid"] = serde_json::json!(grid);
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        OutputFormat::Csv => print_csv(&reports, grid.as_ref()),
        OutputFormat::Minimal => {
            for report in &reports {
                match &report.error {
                    Some(error) => println!("{}\terror: {}", report.name, error),
                    None => {
                        let values: Vec<String> = report
                            .values
                            .iter()
                            .map(|v| format_value(v.y, settings.precision))
                            .collect();
                        println!("{}\t{}", report.name, values.join(" "));
                    }
                }
            }
            Ok(())
        }
    }
}

/// Resolves strategy keys, falling back to the default order.
fn parse_strategies(keys: &[String]) -> CliResult<Vec<Strategy>> {
    if keys.is_empty() {
        return Ok(Strategy::DEFAULT.to_vec());
    }
    keys.iter()
        .map(|k| Strategy::from_key(k).ok_or_else(|| CliError::UnknownStrategy(k.clone())))
        .collect()
}

/// Evaluates every successful function on `n` points covering the samples
/// and the requested evaluation points.
fn evaluate_grid(result: &InterpolationResult, at: &[f64], n: usize) -> CliResult<Grid> {
    if n < 2 {
        return Err(CliError::InvalidArgument(format!(
            "--grid needs at least 2 points, got {n}"
        )));
    }
    let table = result.table();
    let lo = at.iter().copied().fold(table.min_x(), f64::min);
    let hi = at.iter().copied().fold(table.max_x(), f64::max);
    let x = linspace(lo, hi, n);

    let functions = result
        .functions()
        .map(|f| GridColumn {
            name: f.name().to_string(),
            values: f.at_many(&x),
        })
        .collect();
    Ok(Grid { x, functions })
}

fn print_tables(
    result: &InterpolationResult,
    reports: &[StrategyReport],
    grid: Option<&Grid>,
    quiet: bool,
    precision: usize,
) -> Result<()> {
    if !quiet {
        let samples: Vec<SampleRow> = result
            .table()
            .points()
            .map(|(x, y)| SampleRow {
                x: format_value(x, precision),
                y: format_value(y, precision),
            })
            .collect();
        print_header("Samples");
        print_output(&samples, OutputFormat::Table)?;

        print_header("Finite Differences");
        print_differences(result.table(), result.differences(), OutputFormat::Table, precision)?;
    }

    // one column per --at point, plus the failure reason if any strategy failed
    let at: Vec<f64> = reports
        .iter()
        .find(|r| r.error.is_none())
        .map(|r| r.values.iter().map(|v| v.x).collect())
        .unwrap_or_default();
    let any_failed = reports.iter().any(|r| r.error.is_some());
    let mut any_extrapolated = false;

    let mut builder = Builder::default();
    let mut header = vec!["Strategy".to_string(), "Status".to_string()];
    header.extend(at.iter().map(|x| format!("f({})", format_value(*x, precision))));
    if any_failed {
        header.push("Detail".to_string());
    }
    builder.push_record(header);

    for report in reports {
        let mut record = vec![report.name.clone(), report.status.to_string()];
        match &report.error {
            Some(error) => {
                record.extend(at.iter().map(|_| String::new()));
                record.push(error.clone());
            }
            None => {
                record.extend(report.values.iter().map(|v| {
                    any_extrapolated |= v.extrapolated;
                    let value = format_value(v.y, precision);
                    if v.extrapolated {
                        format!("{value}*")
                    } else {
                        value
                    }
                }));
                if any_failed {
                    record.push(String::new());
                }
            }
        }
        builder.push_record(record);
    }

    print_header("Results");
    println!("{}", builder.build().with(Style::rounded()));

    if any_extrapolated {
        let table = result.table();
        println!(
            "* extrapolated outside [{}, {}]",
            format_value(table.min_x(), precision),
            format_value(table.max_x(), precision)
        );
    }

    if let Some(grid) = grid {
        let mut builder = Builder::default();
        let mut header = vec!["x".to_string()];
        header.extend(grid.functions.iter().map(|f| f.name.clone()));
        builder.push_record(header);
        for (i, x) in grid.x.iter().enumerate() {
            let mut record = vec![format_value(*x, precision)];
            record.extend(grid.functions.iter().map(|f| format_value(f.values[i], precision)));
            builder.push_record(record);
        }
        print_header("Evaluation Grid");
        println!("{}", builder.build().with(Style::rounded()));
    }

    if !quiet {
        let succeeded = reports.iter().filter(|r| r.error.is_none()).count();
        if succeeded == reports.len() {
            print_info(&format!("{succeeded} of {} strategies succeeded", reports.len()));
        } else {
            print_warning(&format!("{succeeded} of {} strategies succeeded", reports.len()));
        }
    }
    Ok(())
}

fn print_csv(reports: &[StrategyReport], grid: Option<&Grid>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());

    for report in reports {
        if let Some(error) = &report.error {
            wtr.serialize(EvaluationRow {
                strategy: &report.name,
                status: report.status,
                kind: "",
                x: None,
                y: None,
                extrapolated: None,
                error: Some(error),
            })?;
            continue;
        }
        for v in &report.values {
            wtr.serialize(EvaluationRow {
                strategy: &report.name,
                status: report.status,
                kind: "at",
                x: Some(v.x),
                y: Some(v.y),
                extrapolated: Some(v.extrapolated),
                error: None,
            })?;
        }
        if let Some(grid) = grid {
            let column = grid.functions.iter().find(|f| f.name == report.name);
            for (i, x) in grid.x.iter().enumerate() {
                wtr.serialize(EvaluationRow {
                    strategy: &report.name,
                    status: report.status,
                    kind: "grid",
                    x: Some(*x),
                    y: column.map(|c| c.values[i]),
                    extrapolated: None,
                    error: None,
                })?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use polyterp_math::interpolate;

    #[test]
    fn test_parse_strategies() {
        assert_eq!(parse_strategies(&[]).unwrap(), Strategy::DEFAULT.to_vec());
        let keys = vec!["gauss".to_string(), "Lagrange".to_string()];
        assert_eq!(
            parse_strategies(&keys).unwrap(),
            vec![Strategy::Gauss, Strategy::Lagrange]
        );
        assert!(matches!(
            parse_strategies(&["spline".to_string()]),
            Err(CliError::UnknownStrategy(k)) if k == "spline"
        ));
    }

    #[test]
    fn test_reports() {
        let result = interpolate(&[0.0, 1.0, 3.0], &[0.0, 1.0, 9.0]).unwrap();
        let reports: Vec<StrategyReport> = result
            .entities()
            .iter()
            .map(|e| StrategyReport::new(e, &[2.0, 4.0]))
            .collect();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].status, "success");
        assert_relative_eq!(reports[0].values[0].y, 4.0, epsilon = 1e-12);
        assert!(!reports[0].values[0].extrapolated);
        assert!(reports[0].values[1].extrapolated);

        assert_eq!(reports[2].status, "error");
        assert!(reports[2].values.is_empty());
        assert!(reports[2].error.is_some());
    }

    #[test]
    fn test_grid_spans_samples_and_points() {
        let result = interpolate(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        let grid = evaluate_grid(&result, &[-1.0, 3.0], 5).unwrap();

        assert_eq!(grid.x, vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
        assert_eq!(grid.functions.len(), 3);
        for column in &grid.functions {
            for (x, y) in grid.x.iter().zip(&column.values) {
                assert_relative_eq!(*y, x * x, epsilon = 1e-12);
            }
        }

        assert!(matches!(
            evaluate_grid(&result, &[], 1),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
