//! Core Extractor implementation

use crate::assembler::{Assembler, ParsedDocument};
use crate::config::ExtractorConfig;
use crate::discovery::discover_documents;
use crate::document::read_lines;
use crate::error::ExtractorError;
use quizbank_gatekeeper::Gatekeeper;
use std::path::{Path, PathBuf};
use tracing::info;

/// The Extractor turns quiz documents into draft questions
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
    gatekeeper: Gatekeeper,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(config: ExtractorConfig, gatekeeper: Gatekeeper) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        gatekeeper
            .config()
            .validate()
            .map_err(ExtractorError::Config)?;
        Ok(Self { config, gatekeeper })
    }

    /// Create an Extractor with default configuration
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Documents under `dir`, recursively, in path order
    pub fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>, ExtractorError> {
        discover_documents(dir, &self.config)
    }

    /// Extract the questions of one document
    pub fn extract_file(&self, path: &Path) -> Result<ParsedDocument, ExtractorError> {
        let lines = read_lines(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let parsed = self.extract_lines(&lines, &name)?;
        info!(
            "{} questions extracted from {} ({} dropped)",
            parsed.questions.len(),
            name,
            parsed.dropped
        );
        Ok(parsed)
    }

    /// Extract questions from already-normalized lines
    pub fn extract_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
        document: &str,
    ) -> Result<ParsedDocument, ExtractorError> {
        let mut assembler = Assembler::new(&self.gatekeeper);
        for line in lines {
            assembler.feed(line.as_ref());
        }
        assembler.finish(document)
    }
}
