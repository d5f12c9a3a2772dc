//! Question validation logic

use crate::ValidationConfig;
use once_cell::sync::Lazy;
use quizbank_domain::{clean_text, AnswerOption, DraftQuestion, GroupKey, MERGE_LETTERS};
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

/// Parenthesized letter inside the raw answer line, e.g. `Opción 3 (C)`
static PAREN_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(([A-E])\)").expect("valid regex"));

/// Reasons a question is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// Too few or too many options
    #[error("{count} options (expected {min}-{max})")]
    OptionCount {
        /// Options found
        count: usize,
        /// Minimum accepted
        min: usize,
        /// Maximum accepted
        max: usize,
    },

    /// The same letter labels two options
    #[error("duplicate option letter '{0}'")]
    DuplicateLetter(char),

    /// An option letter outside the accepted range
    #[error("option letter '{0}' outside A-E")]
    LetterOutOfRange(char),

    /// The answer does not name one of the options
    #[error("answer '{answer}' not among {letters:?}")]
    AnswerMismatch {
        /// Answer as found in the document
        answer: String,
        /// Letters of the options present
        letters: Vec<char>,
    },
}

/// How the answer of a merge-validated question was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerStatus {
    /// The answer already named one of the options
    Valid,
    /// Recovered by matching the answer text against option texts
    MatchedOptionText,
    /// Recovered from a parenthesized letter in the raw answer line
    RecoveredFromOriginal,
    /// Could not be resolved; the answer was cleared
    Cleared,
}

/// A question that passed merge validation
#[derive(Debug, Clone, PartialEq)]
pub struct MergeValidation {
    /// The normalized question, options sorted, answer settled
    pub question: DraftQuestion,
    /// How the answer was settled
    pub answer_status: AnswerStatus,
}

/// Outcome of merge-validating a batch
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Questions to persist, in input order
    pub accepted: Vec<DraftQuestion>,
    /// 1-based input position and reason of every dropped question
    pub rejected: Vec<(usize, RejectionReason)>,
    /// Accepted questions whose answer had to be cleared
    pub answers_cleared: usize,
}

/// The Gatekeeper validates questions before they are committed or persisted
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Commit check applied when a question block ends.
    ///
    /// Accepts only if the option count is within bounds, the option letters
    /// are unique, and the answer (when set) names one of the options.
    pub fn check_commit(&self, question: &DraftQuestion) -> Result<(), RejectionReason> {
        self.check_option_count(question.options.len())?;
        check_unique_letters(&question.options)?;

        let answer = question.answer.trim();
        if answer.is_empty() {
            return Ok(());
        }
        match single_letter(answer) {
            Some(letter) if question.has_letter(letter) => Ok(()),
            _ => Err(RejectionReason::AnswerMismatch {
                answer: answer.to_string(),
                letters: question.letters(),
            }),
        }
    }

    /// Merge-time validation applied before a question is persisted.
    ///
    /// Returns an error only for structural problems. An answer that names no
    /// option is recovered when possible and cleared otherwise.
    pub fn validate_for_merge(
        &self,
        question: &DraftQuestion,
    ) -> Result<MergeValidation, RejectionReason> {
        self.check_option_count(question.options.len())?;

        let mut options: Vec<AnswerOption> = question
            .options
            .iter()
            .map(|o| AnswerOption::new(o.letter.to_ascii_uppercase(), clean_text(&o.text)))
            .collect();
        if let Some(bad) = options.iter().find(|o| !MERGE_LETTERS.contains(&o.letter)) {
            return Err(RejectionReason::LetterOutOfRange(bad.letter));
        }
        check_unique_letters(&options)?;
        options.sort_by_key(|o| o.letter);

        let (answer, answer_status) = resolve_answer(question, &options);

        Ok(MergeValidation {
            question: DraftQuestion {
                stem: clean_text(&question.stem),
                options,
                answer,
                explanation: clean_text(&question.explanation),
                reference: clean_text(&question.reference),
                original_answer: None,
            },
            answer_status,
        })
    }

    /// Merge-validate a whole batch for one group, logging every rejection
    pub fn validate_batch(&self, group: &GroupKey, questions: &[DraftQuestion]) -> ValidationResult {
        let mut result = ValidationResult::default();

        for (idx, question) in questions.iter().enumerate() {
            let position = idx + 1;
            match self.validate_for_merge(question) {
                Ok(MergeValidation {
                    question,
                    answer_status,
                }) => {
                    match answer_status {
                        AnswerStatus::Cleared => {
                            warn!(
                                "[{}] Q{}: answer letter not recognized, left empty",
                                group, position
                            );
                            result.answers_cleared += 1;
                        }
                        AnswerStatus::Valid => {}
                        recovered => {
                            debug!("[{}] Q{}: answer recovered ({:?})", group, position, recovered);
                        }
                    }
                    result.accepted.push(question);
                }
                Err(reason) => {
                    warn!("[{}] Q{} ignored: {}", group, position, reason);
                    result.rejected.push((position, reason));
                }
            }
        }

        if result.accepted.is_empty() {
            warn!("No valid questions for {}", group);
        }
        result
    }

    fn check_option_count(&self, count: usize) -> Result<(), RejectionReason> {
        if self.config.accepts_option_count(count) {
            Ok(())
        } else {
            Err(RejectionReason::OptionCount {
                count,
                min: self.config.min_options,
                max: self.config.max_options,
            })
        }
    }
}

fn check_unique_letters(options: &[AnswerOption]) -> Result<(), RejectionReason> {
    let mut seen = HashSet::new();
    for option in options {
        let letter = option.letter.to_ascii_uppercase();
        if !seen.insert(letter) {
            return Err(RejectionReason::DuplicateLetter(letter));
        }
    }
    Ok(())
}

fn single_letter(answer: &str) -> Option<char> {
    let mut chars = answer.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

/// Settle the answer against already-normalized, sorted options
fn resolve_answer(question: &DraftQuestion, options: &[AnswerOption]) -> (String, AnswerStatus) {
    let answer = question.answer.trim().to_uppercase();
    let names_option = |letter: char| options.iter().any(|o| o.letter == letter);

    if let Some(letter) = single_letter(&answer) {
        if names_option(letter) {
            return (letter.to_string(), AnswerStatus::Valid);
        }
    }

    // Answer given as text rather than a letter
    if answer.chars().count() > 1 {
        let needle = answer.to_lowercase();
        if let Some(option) = options
            .iter()
            .find(|o| o.text.to_lowercase().contains(&needle))
        {
            return (option.letter.to_string(), AnswerStatus::MatchedOptionText);
        }
    }

    if let Some(original) = question.original_answer.as_deref() {
        let letter = PAREN_LETTER
            .captures(original)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().chars().next())
            .map(|c| c.to_ascii_uppercase());
        if let Some(letter) = letter.filter(|&l| names_option(l)) {
            return (letter.to_string(), AnswerStatus::RecoveredFromOriginal);
        }
    }

    (String::new(), AnswerStatus::Cleared)
}
