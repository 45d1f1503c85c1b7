//! CLI error types.

use std::path::PathBuf;

use polyterp_math::InterpError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A value that should be a number.
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    /// The sample source arguments do not describe exactly one source.
    #[error("Invalid sample source: {0}")]
    InvalidSource(String),

    /// A source produced too few samples.
    #[error("Not enough points: {source_name} needs at least {required}, got {actual}")]
    NotEnoughPoints {
        /// Which source was read.
        source_name: &'static str,
        /// Minimum number of samples.
        required: usize,
        /// Samples read.
        actual: usize,
    },

    /// A malformed line or record in a sample file or stdin.
    #[error("{origin}:{line}: {reason}")]
    MalformedRecord {
        /// File path or `<stdin>`.
        origin: String,
        /// 1-based line number.
        line: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A command argument outside its accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown strategy key.
    #[error("Unknown strategy: '{0}'. Use lagrange, newton, newton-equal, newton-non-equal or gauss.")]
    UnknownStrategy(String),

    /// The interpolation itself failed.
    #[error(transparent)]
    Interpolation(#[from] InterpError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings file could not be parsed.
    #[error("Could not read settings from {path}: {reason}")]
    ConfigFile {
        /// Settings file path.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
