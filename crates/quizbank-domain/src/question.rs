//! Question records, before and after persistence

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Option letters accepted once a question reaches the bank.
///
/// The document patterns only ever produce `A`–`D`; the wider range here is
/// what merge-time validation and the bank accept.
pub const MERGE_LETTERS: RangeInclusive<char> = 'A'..='E';

/// One lettered answer option of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Option letter (`A`, `B`, ...)
    #[serde(rename = "letra")]
    pub letter: char,

    /// Option text
    #[serde(rename = "texto")]
    pub text: String,
}

impl AnswerOption {
    /// Create a new option
    pub fn new(letter: char, text: impl Into<String>) -> Self {
        Self {
            letter,
            text: text.into(),
        }
    }
}

/// A question as assembled from a document, before it has an ID.
///
/// `answer` is a single letter, or empty when the document did not give a
/// usable one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftQuestion {
    /// Question stem
    #[serde(rename = "enunciado")]
    pub stem: String,

    /// Options in document order
    #[serde(rename = "opciones", default)]
    pub options: Vec<AnswerOption>,

    /// Correct answer letter, or empty
    #[serde(rename = "respuesta_correcta", default)]
    pub answer: String,

    /// Explanation text, may be empty
    #[serde(rename = "explicacion", default)]
    pub explanation: String,

    /// Reference text, may be empty
    #[serde(rename = "referencia", default)]
    pub reference: String,

    /// Raw text of the answer line, kept for merge-time answer recovery.
    /// Never written to the bank.
    #[serde(
        rename = "respuesta_original",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_answer: Option<String>,
}

impl DraftQuestion {
    /// Start a new draft with the given stem and every other field empty
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            ..Self::default()
        }
    }

    /// Letters of the options, in their current order (uppercased)
    pub fn letters(&self) -> Vec<char> {
        self.options
            .iter()
            .map(|o| o.letter.to_ascii_uppercase())
            .collect()
    }

    /// Whether `letter` names one of this question's options
    pub fn has_letter(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.options
            .iter()
            .any(|o| o.letter.to_ascii_uppercase() == letter)
    }

    /// Sort options by letter
    pub fn sort_options(&mut self) {
        self.options.sort_by_key(|o| o.letter);
    }
}

/// A question stored in the bank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// `<subject initials>_<source initials>_<NNN>`
    pub id: String,

    /// Subject the question belongs to
    #[serde(rename = "asignatura")]
    pub subject: String,

    /// Test or document the question came from
    #[serde(rename = "origen")]
    pub source: String,

    /// Question stem
    #[serde(rename = "enunciado")]
    pub stem: String,

    /// Options sorted by letter
    #[serde(rename = "opciones")]
    pub options: Vec<AnswerOption>,

    /// Correct answer letter, or empty for an unscored question
    #[serde(rename = "respuesta_correcta", default)]
    pub answer: String,

    /// Explanation text
    #[serde(rename = "explicacion", default)]
    pub explanation: String,

    /// Reference text
    #[serde(rename = "referencia", default)]
    pub reference: String,
}

impl Question {
    /// Attach persistence fields to a validated draft
    pub fn from_draft(
        id: String,
        subject: impl Into<String>,
        source: impl Into<String>,
        draft: DraftQuestion,
    ) -> Self {
        Self {
            id,
            subject: subject.into(),
            source: source.into(),
            stem: draft.stem,
            options: draft.options,
            answer: draft.answer,
            explanation: draft.explanation,
            reference: draft.reference,
        }
    }

    /// Whether the question has a correct answer to score against
    pub fn is_scored(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Check a user's answer. Unscored questions never match.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.is_scored() && self.answer.eq_ignore_ascii_case(answer.trim())
    }

    /// Whether this question belongs to the given group
    pub fn in_group(&self, subject: &str, source: &str) -> bool {
        self.subject == subject && self.source == source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DraftQuestion {
        DraftQuestion {
            stem: "¿Qué es una clave primaria?".to_string(),
            options: vec![
                AnswerOption::new('C', "Un índice"),
                AnswerOption::new('A', "Un campo único"),
                AnswerOption::new('B', "Un campo repetido"),
            ],
            answer: "A".to_string(),
            ..DraftQuestion::default()
        }
    }

    #[test]
    fn test_sort_options() {
        let mut q = draft();
        q.sort_options();
        assert_eq!(q.letters(), vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_has_letter_ignores_case() {
        let q = draft();
        assert!(q.has_letter('b'));
        assert!(!q.has_letter('D'));
    }

    #[test]
    fn test_wire_names() {
        let q = Question::from_draft("BDD_T1_001".to_string(), "Bases de Datos", "Test 1", draft());
        let json = serde_json::to_value(&q).unwrap();

        assert_eq!(json["id"], "BDD_T1_001");
        assert_eq!(json["asignatura"], "Bases de Datos");
        assert_eq!(json["origen"], "Test 1");
        assert_eq!(json["respuesta_correcta"], "A");
        assert_eq!(json["opciones"][0]["letra"], "C");
        assert!(json.get("respuesta_original").is_none());
    }

    #[test]
    fn test_original_answer_not_serialized_when_absent() {
        let json = serde_json::to_value(draft()).unwrap();
        assert!(json.get("respuesta_original").is_none());
    }

    #[test]
    fn test_unscored_question_never_correct() {
        let mut q = Question::from_draft("X_Y_001".to_string(), "X", "Y", draft());
        assert!(q.is_correct("a"));
        assert!(!q.is_correct("B"));

        q.answer.clear();
        assert!(!q.is_scored());
        assert!(!q.is_correct(""));
    }
}
