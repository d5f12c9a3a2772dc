//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The directory to extract from does not exist
    #[error("Input directory not found: {0}")]
    InputDirNotFound(PathBuf),

    /// Extractor error
    #[error("Extraction error: {0}")]
    Extractor(#[from] quizbank_extractor::ExtractorError),

    /// Bank error
    #[error("Bank error: {0}")]
    Store(#[from] quizbank_store::StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
