//! Sample acquisition.
//!
//! Exactly one of four sources feeds a run: inline lists, a two-column CSV
//! file, a built-in function sampled on an interval, or `x y` lines on stdin.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use polyterp_math::SampleTable;

use crate::error::{CliError, CliResult};
use crate::output::print_warning;

/// Minimum number of rows in a sample file.
pub const MIN_FILE_POINTS: usize = 5;

/// Largest table whose polynomials are still well behaved. Larger tables are
/// interpolated anyway, with a warning.
pub const MAX_RECOMMENDED_POINTS: usize = 20;

/// Arguments selecting where the samples come from.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// X values (comma-separated, e.g., "0.1,0.2,0.3")
    #[arg(long, allow_hyphen_values = true)]
    pub xs: Option<String>,

    /// Y values (comma-separated, same length as --xs)
    #[arg(long, allow_hyphen_values = true)]
    pub ys: Option<String>,

    /// Headerless CSV file with one "x,y" pair per row
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Built-in function to sample
    #[arg(long, value_enum)]
    pub function: Option<SampleFunction>,

    /// Interval to sample the function on
    #[arg(long, num_args = 2, value_names = ["A", "B"], allow_negative_numbers = true)]
    pub interval: Option<Vec<f64>>,

    /// Number of evenly spaced points to sample, ends included
    #[arg(long, default_value = "10")]
    pub count: usize,

    /// Read whitespace-separated "x y" lines from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Functions that can be sampled with `--function`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleFunction {
    /// sin(x)
    Sin,
    /// cos(x)
    Cos,
    /// exp(x)
    Exp,
    /// x²
    Square,
}

impl SampleFunction {
    /// Evaluates the function.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Exp => x.exp(),
            Self::Square => x * x,
        }
    }
}

impl SourceArgs {
    /// Reads the selected source into a sorted, validated sample table.
    pub fn load(&self) -> CliResult<SampleTable> {
        let selected = [
            self.xs.is_some() || self.ys.is_some(),
            self.file.is_some(),
            self.function.is_some(),
            self.stdin,
        ]
        .iter()
        .filter(|s| **s)
        .count();

        if selected != 1 {
            return Err(CliError::InvalidSource(
                "choose exactly one of --xs/--ys, --file, --function or --stdin".to_string(),
            ));
        }

        let (xs, ys) = if let Some(path) = &self.file {
            read_file(path)?
        } else if let Some(function) = self.function {
            let interval = self.interval.as_deref().ok_or_else(|| {
                CliError::InvalidSource("--function needs --interval A B".to_string())
            })?;
            sample_function(function, interval[0], interval[1], self.count)?
        } else if self.stdin {
            read_lines(std::io::stdin().lock(), "<stdin>")?
        } else {
            let (Some(xs), Some(ys)) = (&self.xs, &self.ys) else {
                return Err(CliError::InvalidSource(
                    "--xs and --ys must be given together".to_string(),
                ));
            };
            (parse_values(xs)?, parse_values(ys)?)
        };

        tracing::debug!(points = xs.len(), "samples loaded");
        let table = SampleTable::new(&xs, &ys)?;
        if let Some(message) = size_warning(table.len()) {
            print_warning(&message);
        }
        Ok(table)
    }
}

/// Parses a comma-separated list of numbers.
pub fn parse_values(s: &str) -> CliResult<Vec<f64>> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.parse().map_err(|_| CliError::InvalidNumber(v.to_string())))
        .collect()
}

/// `count` evenly spaced points from `a` to `b`, both included.
pub fn linspace(a: f64, b: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { b } else { a + step * i as f64 })
                .collect()
        }
    }
}

/// The warning printed for a table of `points` samples, if it is too large.
pub fn size_warning(points: usize) -> Option<String> {
    (points > MAX_RECOMMENDED_POINTS).then(|| {
        format!(
            "Too many points ({points} > {MAX_RECOMMENDED_POINTS}): high-degree polynomials are unstable, results are not guaranteed"
        )
    })
}

fn sample_function(
    function: SampleFunction,
    a: f64,
    b: f64,
    count: usize,
) -> CliResult<(Vec<f64>, Vec<f64>)> {
    if !a.is_finite() || !b.is_finite() {
        return Err(CliError::InvalidSource(format!(
            "interval ends must be finite, got [{a}, {b}]"
        )));
    }
    if a >= b {
        return Err(CliError::InvalidSource(format!(
            "[{a}, {b}] is not an interval: A must be less than B"
        )));
    }
    let xs = linspace(a, b, count);
    let ys = xs.iter().map(|&x| function.apply(x)).collect();
    Ok((xs, ys))
}

fn read_file(path: &Path) -> CliResult<(Vec<f64>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let origin = path.display().to_string();
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = record.position().map_or(i + 1, |p| p.line() as usize);
        if record.len() != 2 {
            return Err(CliError::MalformedRecord {
                origin,
                line,
                reason: format!("expected 2 fields, found {}", record.len()),
            });
        }
        xs.push(parse_field(&record[0], &origin, line)?);
        ys.push(parse_field(&record[1], &origin, line)?);
    }

    if xs.len() < MIN_FILE_POINTS {
        return Err(CliError::NotEnoughPoints {
            source_name: "sample file",
            required: MIN_FILE_POINTS,
            actual: xs.len(),
        });
    }
    Ok((xs, ys))
}

/// Reads `x y` pairs, one per line. Blank lines and `#` comments are skipped.
fn read_lines<R: BufRead>(reader: R, origin: &str) -> CliResult<(Vec<f64>, Vec<f64>)> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = content.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(CliError::MalformedRecord {
                origin: origin.to_string(),
                line: i + 1,
                reason: format!("expected \"x y\", found '{content}'"),
            });
        }
        xs.push(parse_field(fields[0], origin, i + 1)?);
        ys.push(parse_field(fields[1], origin, i + 1)?);
    }
    Ok((xs, ys))
}

fn parse_field(field: &str, origin: &str, line: usize) -> CliResult<f64> {
    field.parse().map_err(|_| CliError::MalformedRecord {
        origin: origin.to_string(),
        line,
        reason: format!("'{field}' is not a number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_values("1, 2.5,-3").unwrap(), vec![1.0, 2.5, -3.0]);
        assert_eq!(parse_values("1,2,").unwrap(), vec![1.0, 2.0]);
        assert!(matches!(parse_values("1,x"), Err(CliError::InvalidNumber(v)) if v == "x"));
    }

    #[test]
    fn test_linspace_includes_ends() {
        let xs = linspace(0.0, 1.0, 5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
        assert!(linspace(2.0, 3.0, 0).is_empty());
    }

    #[test]
    fn test_function_source() {
        let args = SourceArgs {
            function: Some(SampleFunction::Square),
            interval: Some(vec![-1.0, 1.0]),
            count: 3,
            ..Default::default()
        };
        let table = args.load().unwrap();
        assert_eq!(table.xs(), &[-1.0, 0.0, 1.0]);
        assert_eq!(table.ys(), &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_function_source_needs_interval() {
        let args = SourceArgs {
            function: Some(SampleFunction::Sin),
            count: 4,
            ..Default::default()
        };
        assert!(matches!(args.load(), Err(CliError::InvalidSource(_))));
    }

    #[test]
    fn test_function_source_rejects_reversed_interval() {
        for interval in [vec![1.0, -1.0], vec![2.0, 2.0]] {
            let args = SourceArgs {
                function: Some(SampleFunction::Cos),
                interval: Some(interval),
                count: 5,
                ..Default::default()
            };
            let err = args.load().unwrap_err();
            assert!(err.to_string().contains("not an interval"), "{err}");
        }
    }

    #[test]
    fn test_size_warning_above_twenty_points() {
        assert_eq!(size_warning(MIN_FILE_POINTS), None);
        assert_eq!(size_warning(MAX_RECOMMENDED_POINTS), None);
        let message = size_warning(MAX_RECOMMENDED_POINTS + 1).unwrap();
        assert!(message.starts_with("Too many points (21 > 20)"));
    }

    #[test]
    fn test_exactly_one_source() {
        assert!(matches!(
            SourceArgs::default().load(),
            Err(CliError::InvalidSource(_))
        ));

        let both = SourceArgs {
            xs: Some("0,1".to_string()),
            ys: Some("0,1".to_string()),
            stdin: true,
            ..Default::default()
        };
        assert!(matches!(both.load(), Err(CliError::InvalidSource(_))));

        let half = SourceArgs {
            xs: Some("0,1".to_string()),
            ..Default::default()
        };
        assert!(matches!(half.load(), Err(CliError::InvalidSource(_))));
    }

    #[test]
    fn test_inline_lists_are_sorted() {
        let args = SourceArgs {
            xs: Some("2,0,1".to_string()),
            ys: Some("4,0,1".to_string()),
            ..Default::default()
        };
        let table = args.load().unwrap();
        assert_eq!(table.xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(table.ys(), &[0.0, 1.0, 4.0]);
    }

    #[test]
    fn test_read_lines() {
        let input = "# x y\n0 1\n\n1   2.5\n2\t4\n";
        let (xs, ys) = read_lines(input.as_bytes(), "<test>").unwrap();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(ys, vec![1.0, 2.5, 4.0]);

        let err = read_lines("0 1\n1 2 3\n".as_bytes(), "<test>").unwrap_err();
        assert!(matches!(err, CliError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.1,1.25\n0.2, 2.38\n0.3,3.79\n0.4,5.44\n0.5,7.14").unwrap();

        let (xs, ys) = read_file(file.path()).unwrap();
        assert_eq!(xs, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(ys[1], 2.38);
    }

    #[test]
    fn test_read_file_needs_five_points() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0\n1,1\n2,4\n3,9").unwrap();

        let err = read_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            CliError::NotEnoughPoints { required: 5, actual: 4, .. }
        ));
    }

    #[test]
    fn test_read_file_rejects_bad_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0\n1,one\n2,4\n3,9\n4,16").unwrap();

        let err = read_file(file.path()).unwrap_err();
        assert!(matches!(err, CliError::MalformedRecord { line: 2, .. }));
    }
}
