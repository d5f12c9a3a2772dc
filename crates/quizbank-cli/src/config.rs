//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use quizbank_extractor::ExtractorConfig;
use quizbank_gatekeeper::ValidationConfig;
use quizbank_store::BuildMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input and output locations
    #[serde(default)]
    pub paths: Paths,

    /// Document discovery and build behavior
    #[serde(default)]
    pub extraction: Extraction,

    /// Option-count bounds
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Default locations used when no flag overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paths {
    /// Directory searched for documents
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Bank file
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
}

/// Extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    /// Build mode applied to every document
    #[serde(default)]
    pub mode: BuildMode,

    /// Document file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Files whose name starts with this are skipped
    #[serde(default = "default_lock_file_prefix")]
    pub lock_file_prefix: String,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".quizbank").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is read
    /// when present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' does not exist",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values a run depends on.
    pub fn validate(&self) -> Result<()> {
        self.extractor_config()
            .validate()
            .map_err(CliError::Config)?;
        self.validation.validate().map_err(CliError::Config)?;
        Ok(())
    }

    /// Discovery settings for the extractor.
    pub fn extractor_config(&self) -> ExtractorConfig {
        ExtractorConfig {
            extension: self.extraction.extension.clone(),
            lock_file_prefix: self.extraction.lock_file_prefix.clone(),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_file: default_output_file(),
        }
    }
}

impl Default for Extraction {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            extension: default_extension(),
            lock_file_prefix: default_lock_file_prefix(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("data/docx")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("data/preguntas.json")
}

fn default_extension() -> String {
    ExtractorConfig::default().extension
}

fn default_lock_file_prefix() -> String {
    ExtractorConfig::default().lock_file_prefix
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
