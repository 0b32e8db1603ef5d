//! Error types for the CLI.

use std::path::PathBuf;

use totals_core::{CoreError, ValidationError};

/// CLI errors.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid input record: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Region '{0}' is not configured")]
    UnknownRegion(String),

    #[error("Region '{region}' is priced in {expected}, but the record is in {found}")]
    CurrencyMismatch {
        region: String,
        expected: String,
        found: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;
