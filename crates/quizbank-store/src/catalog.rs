//! Read-side helpers over a stored bank
//!
//! These never fail: a bank that cannot be read yields no questions and the
//! cause is logged.

use crate::bank::JsonBank;
use quizbank_domain::Question;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::error;

/// Question totals for a bank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubjectCounts {
    /// Number of questions in the bank
    pub total: usize,
    /// Questions per subject, ordered by subject name
    pub per_subject: BTreeMap<String, usize>,
}

/// Load every question from a bank file.
///
/// A missing, empty or corrupt file yields an empty list.
pub fn load_questions(path: &Path) -> Vec<Question> {
    match JsonBank::new(path).load() {
        Ok(bank) => bank.questions,
        Err(e) => {
            error!("Error reading bank {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Questions whose subject matches exactly
pub fn filter_by_subject(questions: &[Question], subject: &str) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| q.subject == subject)
        .cloned()
        .collect()
}

/// Up to `n` distinct questions in random order
pub fn pick_random(questions: &[Question], n: usize) -> Vec<Question> {
    pick_random_with(questions, n, &mut rand::rng())
}

/// Up to `n` distinct questions drawn with the given generator
pub fn pick_random_with<R: Rng + ?Sized>(
    questions: &[Question],
    n: usize,
    rng: &mut R,
) -> Vec<Question> {
    let amount = n.min(questions.len());
    questions.choose_multiple(rng, amount).cloned().collect()
}

/// Total and per-subject question counts
pub fn count_by_subject(questions: &[Question]) -> SubjectCounts {
    let mut per_subject = BTreeMap::new();
    for q in questions {
        *per_subject.entry(q.subject.clone()).or_insert(0) += 1;
    }

    SubjectCounts {
        total: questions.len(),
        per_subject,
    }
}

/// Distinct subjects, sorted
pub fn subjects(questions: &[Question]) -> Vec<String> {
    count_by_subject(questions).per_subject.into_keys().collect()
}
