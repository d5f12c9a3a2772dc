//! Numbering and merging validated questions into a bank

use crate::error::StoreError;
use quizbank_domain::{Bank, DraftQuestion, GroupKey, Question};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a build treats questions already stored for the same group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Keep existing questions; new ones continue the numbering
    #[serde(alias = "add")]
    Append,
    /// Remove the group's questions first, then insert
    #[default]
    Replace,
}

impl BuildMode {
    /// Mode name as written in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Append => "append",
            BuildMode::Replace => "replace",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "append" | "add" => Ok(BuildMode::Append),
            "replace" => Ok(BuildMode::Replace),
            other => Err(format!("unknown build mode '{}'", other)),
        }
    }
}

/// What a build did to the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Group that was built
    pub group: GroupKey,
    /// IDs assigned to the new questions, in input order
    pub ids: Vec<String>,
    /// Existing questions removed (replace mode)
    pub removed: usize,
    /// Questions dropped by merge validation
    pub rejected: usize,
    /// New questions stored with an empty answer
    pub answers_cleared: usize,
}

impl BuildReport {
    /// Number of questions added
    pub fn added(&self) -> usize {
        self.ids.len()
    }
}

/// Insert validated questions for `group` into `bank`.
///
/// In replace mode the group's questions are removed first. New IDs continue
/// from the highest sequence number already used by the group's ID prefix,
/// so numbering restarts at 1 only when nothing else holds that prefix. The
/// bank is left sorted by ID. Returns the number of removed questions and the
/// new IDs.
///
/// Fails without inserting anything when the prefix has no room left for the
/// whole batch.
pub fn merge_group(
    bank: &mut Bank,
    group: &GroupKey,
    questions: Vec<DraftQuestion>,
    mode: BuildMode,
) -> Result<(usize, Vec<String>), StoreError> {
    let removed = match mode {
        BuildMode::Replace => bank.remove_group(group),
        BuildMode::Append => 0,
    };

    let prefix = group.id_prefix();
    let start = bank.max_sequence(&prefix);
    let last = start
        .checked_add(questions.len() as u64)
        .ok_or(StoreError::SequenceExhausted(prefix))?;

    let mut ids = Vec::with_capacity(questions.len());
    for (sequence, draft) in (start + 1..=last).zip(questions) {
        let id = group.id_for(sequence);
        ids.push(id.clone());
        bank.questions.push(Question::from_draft(
            id,
            group.subject.clone(),
            group.source.clone(),
            draft,
        ));
    }

    bank.sort();
    Ok((removed, ids))
}
