//! File-backed bank builder

use crate::error::StoreError;
use crate::merge::{merge_group, BuildMode, BuildReport};
use quizbank_domain::{Bank, DraftQuestion, GroupKey};
use quizbank_gatekeeper::Gatekeeper;
use serde_json::error::Category;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// The JSON question bank on disk.
///
/// The bank is read and rewritten in full on every build. A missing, empty
/// or unparsable file is treated as an empty bank.
#[derive(Debug, Clone)]
pub struct JsonBank {
    path: PathBuf,
    gatekeeper: Gatekeeper,
}

impl JsonBank {
    /// Create a bank backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            gatekeeper: Gatekeeper::default_config(),
        }
    }

    /// Use a specific gatekeeper for merge validation
    pub fn with_gatekeeper(mut self, gatekeeper: Gatekeeper) -> Self {
        self.gatekeeper = gatekeeper;
        self
    }

    /// Path of the bank file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate and store one group's questions.
    ///
    /// Returns `false` when nothing was stored (no valid questions, an
    /// unreadable bank or an I/O failure); the cause is logged.
    pub fn build(
        &self,
        subject: &str,
        source: &str,
        questions: &[DraftQuestion],
        mode: BuildMode,
    ) -> bool {
        match self.try_build(subject, source, questions, mode) {
            Ok(_) => true,
            Err(e) => {
                error!("Error building bank {}: {}", self.path.display(), e);
                false
            }
        }
    }

    /// Validate and store one group's questions, reporting what changed.
    ///
    /// The bank file is untouched when no question survives validation.
    pub fn try_build(
        &self,
        subject: &str,
        source: &str,
        questions: &[DraftQuestion],
        mode: BuildMode,
    ) -> Result<BuildReport, StoreError> {
        let group = GroupKey::new(subject, source);
        let validation = self.gatekeeper.validate_batch(&group, questions);
        if validation.accepted.is_empty() {
            return Err(StoreError::NoValidQuestions(group.to_string()));
        }

        let mut bank = self.load()?;
        let (removed, ids) = merge_group(&mut bank, &group, validation.accepted, mode)?;
        self.save(&bank)?;

        info!(
            "{} questions added for {} (mode={}, {} replaced)",
            ids.len(),
            group,
            mode,
            removed
        );
        Ok(BuildReport {
            group,
            ids,
            removed,
            rejected: validation.rejected.len(),
            answers_cleared: validation.answers_cleared,
        })
    }

    /// Load the current bank, falling back to an empty one when the file is
    /// missing, empty or not valid JSON.
    ///
    /// Well-formed JSON whose records do not match the bank layout is an
    /// error, so a build never overwrites questions it could not read.
    pub fn load(&self) -> Result<Bank, StoreError> {
        if !self.path.exists() {
            debug!("{} does not exist, starting empty", self.path.display());
            return Ok(Bank::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Bank::new());
        }

        match serde_json::from_str(&contents) {
            Ok(bank) => Ok(bank),
            Err(e) if matches!(e.classify(), Category::Syntax | Category::Eof) => {
                warn!("{} is corrupt ({}), rebuilding", self.path.display(), e);
                Ok(Bank::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the bank as indented UTF-8 JSON, replacing the file in one step
    fn save(&self, bank: &Bank) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(bank)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
