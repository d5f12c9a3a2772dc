//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use quizbank_store::BuildMode;
use std::path::PathBuf;

/// Quizbank - Build a JSON question bank from quiz documents.
#[derive(Debug, Parser)]
#[command(name = "quizbank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "QUIZBANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs and counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract every document in a directory into the bank
    Extract(ExtractArgs),

    /// Show question counts per subject
    Stats(StatsArgs),

    /// Print a random selection of questions
    Sample(SampleArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Directory searched recursively for documents
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Bank file to build
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How existing questions of each group are treated
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Bank file to read
    #[arg(short, long)]
    pub bank: Option<PathBuf>,
}

/// Arguments for the sample command.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Bank file to read
    #[arg(short, long)]
    pub bank: Option<PathBuf>,

    /// Only questions of this subject (exact match)
    #[arg(short, long)]
    pub subject: Option<String>,

    /// Number of questions
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,
}

/// Build mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Keep existing questions and continue numbering
    #[value(alias = "add")]
    Append,
    /// Replace each group's questions
    Replace,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ModeArg> for BuildMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Append => BuildMode::Append,
            ModeArg::Replace => BuildMode::Replace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::parse_from(["quizbank", "extract"]);
        match cli.command {
            Command::Extract(args) => {
                assert!(args.input.is_none());
                assert!(args.output.is_none());
                assert!(args.mode.is_none());
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_extract_arguments() {
        let cli = Cli::parse_from([
            "quizbank", "extract", "-i", "docs", "-o", "out.json", "-m", "append",
        ]);
        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.input, Some(PathBuf::from("docs")));
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
                assert_eq!(args.mode, Some(ModeArg::Append));
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_add_is_append() {
        let cli = Cli::parse_from(["quizbank", "extract", "--mode", "add"]);
        match cli.command {
            Command::Extract(args) => {
                let mode: BuildMode = args.mode.unwrap().into();
                assert_eq!(mode, BuildMode::Append);
            }
            _ => panic!("Expected Extract command"),
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["quizbank", "extract", "-m", "merge"]).is_err());
    }

    #[test]
    fn test_sample_command() {
        let cli = Cli::parse_from(["quizbank", "--no-color", "sample", "-s", "Redes", "-n", "3"]);
        assert!(cli.no_color);
        match cli.command {
            Command::Sample(args) => {
                assert_eq!(args.subject.as_deref(), Some("Redes"));
                assert_eq!(args.count, 3);
            }
            _ => panic!("Expected Sample command"),
        }
    }
}
