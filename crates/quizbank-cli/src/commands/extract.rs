//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use anyhow::Context;
use quizbank_extractor::Extractor;
use quizbank_gatekeeper::Gatekeeper;
use quizbank_store::{BuildMode, BuildReport, JsonBank};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Outcome of a whole extract run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Bank file written
    pub output: PathBuf,
    /// Documents discovered
    pub documents_found: usize,
    /// Questions stored across all documents
    pub questions_stored: usize,
    /// Documents that contributed questions
    pub built: Vec<DocumentOutcome>,
    /// Documents that contributed nothing, with the cause
    pub failed: Vec<DocumentFailure>,
}

/// A document that was stored.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentOutcome {
    /// File name
    pub document: String,
    /// `subject (source)`
    pub group: String,
    /// Questions added
    pub added: usize,
    /// Questions replaced
    pub removed: usize,
    /// Questions stored without an answer
    pub answers_cleared: usize,
}

/// A document that could not be stored.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentFailure {
    /// File name
    pub document: String,
    /// Error chain
    pub reason: String,
}

/// Execute the extract command.
pub fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<RunSummary> {
    let input = args.input.unwrap_or_else(|| config.paths.input_dir.clone());
    let output = args.output.unwrap_or_else(|| config.paths.output_file.clone());
    let mode = args.mode.map(BuildMode::from).unwrap_or(config.extraction.mode);

    let summary = run_extract(&input, &output, mode, config)?;

    if summary.documents_found == 0 {
        println!(
            "{}",
            formatter.warning(&format!("No documents found in {}", input.display()))
        );
    } else {
        println!("{}", formatter.format_summary(&summary)?);
    }
    Ok(summary)
}

/// Extract every document under `input` into the bank at `output`.
///
/// Fails only when `input` is not a directory or the configuration is
/// invalid. Each document is built on its own; a failing document is logged
/// and recorded in the summary.
pub fn run_extract(
    input: &Path,
    output: &Path,
    mode: BuildMode,
    config: &Config,
) -> Result<RunSummary> {
    if !input.is_dir() {
        error!("Input directory {} does not exist", input.display());
        return Err(CliError::InputDirNotFound(input.to_path_buf()));
    }

    let gatekeeper = Gatekeeper::new(config.validation.clone());
    let extractor = Extractor::new(config.extractor_config(), gatekeeper.clone())?;
    let bank = JsonBank::new(output).with_gatekeeper(gatekeeper);

    let documents = extractor.discover(input)?;
    let mut summary = RunSummary {
        output: output.to_path_buf(),
        documents_found: documents.len(),
        questions_stored: 0,
        built: Vec::new(),
        failed: Vec::new(),
    };

    if documents.is_empty() {
        warn!("No documents found in {}", input.display());
        return Ok(summary);
    }
    info!(
        "Processing {} document(s) from {} into {} (mode={})",
        documents.len(),
        input.display(),
        bank.path().display(),
        mode
    );

    for path in &documents {
        let document = display_name(path);
        match process_document(&extractor, &bank, path, mode) {
            Ok(report) => {
                summary.questions_stored += report.added();
                summary.built.push(DocumentOutcome {
                    document,
                    group: report.group.to_string(),
                    added: report.added(),
                    removed: report.removed,
                    answers_cleared: report.answers_cleared,
                });
            }
            Err(e) => {
                error!("{:#}", e);
                summary.failed.push(DocumentFailure {
                    document,
                    reason: format!("{:#}", e),
                });
            }
        }
    }

    info!(
        "Run finished: {} question(s) stored from {} document(s), {} failed",
        summary.questions_stored,
        summary.built.len(),
        summary.failed.len()
    );
    for failure in &summary.failed {
        info!("  failed: {}", failure.document);
    }
    Ok(summary)
}

fn process_document(
    extractor: &Extractor,
    bank: &JsonBank,
    path: &Path,
    mode: BuildMode,
) -> anyhow::Result<BuildReport> {
    let parsed = extractor
        .extract_file(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let report = bank
        .try_build(&parsed.subject, &parsed.source, &parsed.questions, mode)
        .with_context(|| format!("Nothing stored from {}", path.display()))?;
    Ok(report)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
