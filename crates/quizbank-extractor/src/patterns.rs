//! Line classification rules
//!
//! Every rule is case-insensitive and accepts `:` or `.` after its label.
//! Option and answer letters are limited to `A`–`D` here; the bank accepts
//! `A`–`E`, so an `E` option written in a document is never picked up.
//!
//! The header phase uses [`Rule::Subject`] and [`Rule::Source`]; the body
//! phase tries [`BODY_RULES`] in order and takes the first match.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SUBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ASIGNATURA\s*[:.]\s*(.+)$").expect("valid regex"));
static SOURCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ORIGEN\s*[:.]\s*(.+)$").expect("valid regex"));
static QUESTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^PREGUNTA\s+\d+\s*[.:]\s*(.+)$").expect("valid regex"));

/// `OPCIÓN 1 (A): texto` or `• A) texto` / `- A) texto`
static OPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:",
        r"OPCI[ÓO]N\s+\d+\s*\(\s*(?P<let1>[A-D])\s*\)\s*[.:–\-]\s*(?P<txt1>.+)",
        r"|",
        r"[•\-]?\s*(?P<let2>[A-D])\)\s+(?P<txt2>.+)",
        r")"
    ))
    .expect("valid regex")
});

/// `RESPUESTA CORRECTA: Opción 1 (A)` or `RESPUESTA CORRECTA: A`
static ANSWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^RESPUESTA\s+CORRECTA\s*[:.]\s*(?:Opción\s+\d+\s*\(([A-D])\)|([A-D]))")
        .expect("valid regex")
});
static ANSWER_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^RESPUESTA CORRECTA").expect("valid regex"));
static PAREN_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(([A-D])\)").expect("valid regex"));
static COLON_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i):\s*([A-D])\)").expect("valid regex"));

static REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^REFERENCIA\s*[:.]\s*(.+)$").expect("valid regex"));
static EXPLANATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^EXPLICACI[ÓO]N\s*[:.]\s*(.+)$").expect("valid regex"));

/// Structured result of a matching rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// `ASIGNATURA: <subject>`
    Subject(String),
    /// `ORIGEN: <source>`
    Source(String),
    /// `PREGUNTA n. <stem>`
    QuestionHeader(String),
    /// An option in either style
    Option {
        /// Uppercased letter
        letter: char,
        /// Option text
        text: String,
    },
    /// A correct-answer line. `letter` is `None` when the line carries the
    /// label but no recognizable letter.
    Answer {
        /// Uppercased letter, if found
        letter: Option<char>,
        /// The whole line
        raw: String,
    },
    /// `REFERENCIA: <text>`
    Reference(String),
    /// `EXPLICACIÓN: <text>`
    Explanation(String),
}

/// One classification rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Subject header
    Subject,
    /// Source header
    Source,
    /// Question header
    QuestionHeader,
    /// Option, classic or bullet style
    Option,
    /// Correct-answer line
    Answer,
    /// Correct-answer label whose primary pattern failed
    AnswerFallback,
    /// Reference line
    Reference,
    /// Explanation line
    Explanation,
}

/// Body-phase rules in priority order
pub const BODY_RULES: [Rule; 6] = [
    Rule::QuestionHeader,
    Rule::Option,
    Rule::Answer,
    Rule::AnswerFallback,
    Rule::Reference,
    Rule::Explanation,
];

impl Rule {
    /// Try this rule against a normalized line
    pub fn apply(self, line: &str) -> Option<LineMatch> {
        match self {
            Rule::Subject => rest_of_line(&SUBJECT, line).map(LineMatch::Subject),
            Rule::Source => rest_of_line(&SOURCE, line).map(LineMatch::Source),
            Rule::QuestionHeader => rest_of_line(&QUESTION, line).map(LineMatch::QuestionHeader),
            Rule::Option => {
                let caps = OPTION.captures(line)?;
                let letter = letter_of(caps.name("let1").or_else(|| caps.name("let2")))?;
                let text = caps.name("txt1").or_else(|| caps.name("txt2"))?;
                Some(LineMatch::Option {
                    letter,
                    text: text.as_str().trim().to_string(),
                })
            }
            Rule::Answer => {
                let caps = ANSWER.captures(line)?;
                let letter = letter_of(caps.get(1).or_else(|| caps.get(2)))?;
                Some(LineMatch::Answer {
                    letter: Some(letter),
                    raw: line.to_string(),
                })
            }
            Rule::AnswerFallback => {
                if !ANSWER_LABEL.is_match(line) {
                    return None;
                }
                let letter = first_letter(&PAREN_LETTER, line).or_else(|| first_letter(&COLON_LETTER, line));
                Some(LineMatch::Answer {
                    letter,
                    raw: line.to_string(),
                })
            }
            Rule::Reference => rest_of_line(&REFERENCE, line).map(LineMatch::Reference),
            Rule::Explanation => rest_of_line(&EXPLANATION, line).map(LineMatch::Explanation),
        }
    }
}

/// Classify a body line using [`BODY_RULES`] in order
pub fn classify_body(line: &str) -> Option<LineMatch> {
    BODY_RULES.iter().find_map(|rule| rule.apply(line))
}

fn rest_of_line(re: &Regex, line: &str) -> Option<String> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn first_letter(re: &Regex, line: &str) -> Option<char> {
    re.captures(line).and_then(|caps: Captures<'_>| letter_of(caps.get(1)))
}

fn letter_of(m: Option<regex::Match<'_>>) -> Option<char> {
    m.and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase())
}
