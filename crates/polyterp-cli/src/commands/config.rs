//! Config command implementation.
//!
//! Manages persistent CLI settings stored as JSON in the user config directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Subcommand};
use polyterp_math::spacing::DEFAULT_SPACING_TOLERANCE;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_success, print_warning, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Spread of x gaps still treated as uniform spacing
    SpacingTolerance,
    /// Decimal places in table output
    Precision,
    /// Run strategies in parallel
    Parallel,
    /// Output format when --format is not given
    DefaultFormat,
}

impl ConfigKey {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "spacing_tolerance" | "tolerance" => Some(Self::SpacingTolerance),
            "precision" => Some(Self::Precision),
            "parallel" => Some(Self::Parallel),
            "default_format" | "format" => Some(Self::DefaultFormat),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::SpacingTolerance => "spacing_tolerance",
            Self::Precision => "precision",
            Self::Parallel => "parallel",
            Self::DefaultFormat => "default_format",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::SpacingTolerance => "Max spread of x gaps treated as uniform spacing (> 0)",
            Self::Precision => "Number of decimal places for output (0-15)",
            Self::Parallel => "Run strategies in parallel (true, false)",
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
        }
    }

    fn default_value(self) -> &'static str {
        match self {
            Self::SpacingTolerance => "0.00001",
            Self::Precision => "6",
            Self::Parallel => "false",
            Self::DefaultFormat => "table",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::SpacingTolerance,
            Self::Precision,
            Self::Parallel,
            Self::DefaultFormat,
        ]
    }
}

/// Typed view of the stored settings, defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Gap spread below which spacing counts as uniform.
    pub spacing_tolerance: f64,
    /// Decimal places for printed numbers.
    pub precision: usize,
    /// Run the strategies on the rayon pool.
    pub parallel: bool,
    /// Format used when `--format` is not given.
    pub default_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spacing_tolerance: DEFAULT_SPACING_TOLERANCE,
            precision: 6,
            parallel: false,
            default_format: OutputFormat::Table,
        }
    }
}

/// Raw key/value storage backing the settings file.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl Config {
    /// Loads the settings file, or empty settings if it does not exist yet.
    pub fn load(path_override: Option<&Path>) -> CliResult<Self> {
        let path = config_path(path_override)?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content).map_err(|e| CliError::ConfigFile {
                path,
                reason: e.to_string(),
            })
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self, path_override: Option<&Path>) -> Result<()> {
        let path = config_path(path_override)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    fn get(&self, key: ConfigKey) -> &str {
        self.values
            .get(key.as_str())
            .map_or(key.default_value(), String::as_str)
    }

    fn set(&mut self, key: ConfigKey, value: String) {
        self.values.insert(key.as_str().to_string(), value);
    }

    fn remove(&mut self, key: ConfigKey) {
        self.values.remove(key.as_str());
    }

    fn clear(&mut self) {
        self.values.clear();
    }

    /// Parses every stored value, falling back to defaults for unset keys.
    pub fn settings(&self) -> CliResult<Settings> {
        let mut settings = Settings::default();
        for key in ConfigKey::all() {
            let value = self.get(*key);
            match key {
                ConfigKey::SpacingTolerance => settings.spacing_tolerance = parse_tolerance(value)?,
                ConfigKey::Precision => settings.precision = parse_precision(value)?,
                ConfigKey::Parallel => settings.parallel = parse_bool(value)?,
                ConfigKey::DefaultFormat => settings.default_format = parse_format(value)?,
            }
        }
        Ok(settings)
    }

    /// The stored default format, or the built-in one if it cannot be parsed.
    fn stored_format(&self) -> OutputFormat {
        self.settings()
            .map_or(OutputFormat::default(), |s| s.default_format)
    }
}

/// Get the config file path.
fn config_path(path_override: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = path_override {
        return Ok(path.to_path_buf());
    }
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("could not determine config directory".to_string()))?;
    Ok(home.join("polyterp").join("config.json"))
}

/// Execute the config command.
///
/// `path` and `reset --all` do not read the stored file, so both still work
/// when it is unreadable.
pub fn execute(
    args: ConfigArgs,
    path_override: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load(path_override)?;
            execute_show(&config, format.unwrap_or_else(|| config.stored_format()))
        }
        ConfigCommand::Get(get_args) => {
            let config = Config::load(path_override)?;
            execute_get(&config, &get_args, format.unwrap_or_else(|| config.stored_format()))
        }
        ConfigCommand::Set(set_args) => {
            execute_set(Config::load(path_override)?, set_args, path_override)
        }
        ConfigCommand::List => execute_list(format.unwrap_or_default()),
        ConfigCommand::Reset(reset_args) => {
            let config = if reset_args.all {
                Config::default()
            } else {
                Config::load(path_override)?
            };
            execute_reset(config, reset_args, path_override)
        }
        ConfigCommand::Path => execute_path(path_override),
    }
}

/// Show current configuration.
fn execute_show(config: &Config, format: OutputFormat) -> Result<()> {
    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), config.get(*key)))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: HashMap<&str, &str> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), config.get(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for kv in &results {
                println!("{}={}", kv.key, kv.value);
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(config: &Config, args: &GetArgs, format: OutputFormat) -> Result<()> {
    let key = parse_key(&args.key)?;
    let value = config.get(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(mut config: Config, args: SetArgs, path_override: Option<&Path>) -> Result<()> {
    let key = parse_key(&args.key)?;
    let value = normalize_value(key, &args.value)?;

    config.set(key, value.clone());
    config.save(path_override)?;
    tracing::debug!(key = key.as_str(), %value, "setting stored");

    print_success(&format!("Set {} = {}", key.as_str(), value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| {
            KeyValue::new(
                key.as_str(),
                format!("{} (default: {})", key.description(), key.default_value()),
            )
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Available Configuration Keys");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(["key", "description", "default"])?;
            for key in ConfigKey::all() {
                wtr.write_record([key.as_str(), key.description(), key.default_value()])?;
            }
            wtr.flush()?;
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(mut config: Config, args: ResetArgs, path_override: Option<&Path>) -> Result<()> {
    if args.all {
        config.clear();
        config.save(path_override)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = parse_key(&key_str)?;
        config.remove(key);
        config.save(path_override)?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(path_override: Option<&Path>) -> Result<()> {
    let path = config_path(path_override)?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

fn parse_key(s: &str) -> CliResult<ConfigKey> {
    ConfigKey::from_str(s).ok_or_else(|| CliError::Config(format!("unknown key '{s}'")))
}

/// Validates a value and returns it in canonical form.
fn normalize_value(key: ConfigKey, value: &str) -> CliResult<String> {
    Ok(match key {
        ConfigKey::SpacingTolerance => parse_tolerance(value)?.to_string(),
        ConfigKey::Precision => parse_precision(value)?.to_string(),
        ConfigKey::Parallel => parse_bool(value)?.to_string(),
        ConfigKey::DefaultFormat => parse_format(value)?.as_str().to_string(),
    })
}

fn parse_tolerance(value: &str) -> CliResult<f64> {
    match value.trim().parse::<f64>() {
        Ok(t) if t.is_finite() && t > 0.0 => Ok(t),
        _ => Err(CliError::Config(format!(
            "invalid spacing tolerance '{value}', must be a positive number"
        ))),
    }
}

fn parse_precision(value: &str) -> CliResult<usize> {
    match value.trim().parse::<usize>() {
        Ok(p) if p <= 15 => Ok(p),
        _ => Err(CliError::Config(format!(
            "invalid precision '{value}', must be between 0 and 15"
        ))),
    }
}

fn parse_bool(value: &str) -> CliResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(CliError::Config(format!(
            "invalid boolean '{value}', use true or false"
        ))),
    }
}

fn parse_format(value: &str) -> CliResult<OutputFormat> {
    OutputFormat::parse(value.trim()).ok_or_else(|| {
        CliError::Config(format!(
            "invalid format '{value}', use table, json, csv or minimal"
        ))
    })
}
