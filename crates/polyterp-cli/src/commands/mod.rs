//! CLI command implementations.

pub mod config;
pub mod differences;
pub mod run;

pub use config::ConfigArgs;
pub use differences::DifferencesArgs;
pub use run::RunArgs;
