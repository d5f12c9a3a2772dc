//! The persisted question bank

use crate::group::{sequence_of, GroupKey};
use crate::question::Question;
use serde::{Deserialize, Serialize};

/// Every persisted question, kept sorted by ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    /// Questions sorted by `id` ascending
    #[serde(rename = "preguntas", default)]
    pub questions: Vec<Question>,
}

impl Bank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank holds no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Remove every question of the group, returning how many were removed
    pub fn remove_group(&mut self, key: &GroupKey) -> usize {
        let before = self.questions.len();
        self.questions.retain(|q| !q.in_group(&key.subject, &key.source));
        before - self.questions.len()
    }

    /// Highest sequence number among IDs starting with `prefix`, or 0
    pub fn max_sequence(&self, prefix: &str) -> u64 {
        self.questions
            .iter()
            .filter_map(|q| sequence_of(&q.id, prefix))
            .max()
            .unwrap_or(0)
    }

    /// Questions of one group, in bank order
    pub fn group<'a>(&'a self, key: &'a GroupKey) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions
            .iter()
            .filter(move |q| q.in_group(&key.subject, &key.source))
    }

    /// Sort by ID ascending
    pub fn sort(&mut self) {
        self.questions.sort_by(|a, b| a.id.cmp(&b.id));
    }
}
