//! Output formatting utilities.

use colored::Colorize;
use polyterp_math::{DifferenceTable, SampleTable};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
fn print_json<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints one whitespace-separated line per row.
fn print_minimal<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    for item in data {
        let fields: Vec<String> = item.fields().into_iter().map(|f| f.to_string()).collect();
        println!("{}", fields.join(" "));
    }
    Ok(())
}

/// Formats a number with a fixed number of decimals.
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{:.prec$}", value, prec = precision)
}

/// Column headers of the difference table: `x`, `y`, `Δ1`, `Δ2`, ...
fn difference_headers(order: usize) -> Vec<String> {
    let mut headers = vec!["x".to_string(), "y".to_string()];
    headers.extend((1..order).map(|k| format!("Δ{k}")));
    headers
}

/// One JSON row of the difference table; absent cells are `null`.
#[derive(Serialize)]
struct DifferenceRow {
    x: f64,
    differences: Vec<Option<f64>>,
}

/// Prints the triangular difference table. Absent cells are left blank.
pub fn print_differences(
    table: &SampleTable,
    differences: &DifferenceTable,
    format: OutputFormat,
    precision: usize,
) -> anyhow::Result<()> {
    let cell = |v: Option<f64>| v.map(|v| format_value(v, precision)).unwrap_or_default();

    match format {
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(difference_headers(differences.order()));
            for (i, x) in table.xs().iter().enumerate() {
                let mut record = vec![format_value(*x, precision)];
                record.extend(differences.row(i).into_iter().map(&cell));
                builder.push_record(record);
            }
            let rendered = builder
                .build()
                .with(Style::rounded())
                .with(Modify::new(Columns::new(..)).with(Alignment::right()))
                .to_string();
            println!("{}", rendered);
        }
        OutputFormat::Json => {
            let rows: Vec<DifferenceRow> = table
                .xs()
                .iter()
                .enumerate()
                .map(|(i, x)| DifferenceRow {
                    x: *x,
                    differences: differences.row(i),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(difference_headers(differences.order()))?;
            for (i, x) in table.xs().iter().enumerate() {
                let mut record = vec![x.to_string()];
                record.extend(
                    differences
                        .row(i)
                        .into_iter()
                        .map(|v| v.map(|v| v.to_string()).unwrap_or_default()),
                );
                wtr.write_record(record)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for (i, x) in table.xs().iter().enumerate() {
                let mut fields = vec![format_value(*x, precision)];
                fields.extend(
                    differences
                        .row(i)
                        .into_iter()
                        .flatten()
                        .map(|v| format_value(v, precision)),
                );
                println!("{}", fields.join(" "));
            }
        }
    }
    Ok(())
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1.23456, 3), "1.235");
        assert_eq!(format_value(-0.5, 1), "-0.5");
        assert_eq!(format_value(2.0, 0), "2");
    }

    #[test]
    fn test_difference_headers() {
        assert_eq!(difference_headers(4), vec!["x", "y", "Δ1", "Δ2", "Δ3"]);
        assert_eq!(difference_headers(1), vec!["x", "y"]);
    }

    #[test]
    fn test_key_value_fields() {
        let kv = KeyValue::new("precision", "6");
        let fields: Vec<String> = kv.fields().into_iter().map(|f| f.to_string()).collect();
        assert_eq!(fields, vec!["precision", "6"]);
    }
}
