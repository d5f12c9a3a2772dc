//! Question assembly from a classified line stream

use crate::error::ExtractorError;
use crate::patterns::{classify_body, LineMatch, Rule};
use quizbank_domain::{AnswerOption, DraftQuestion, GroupKey};
use quizbank_gatekeeper::Gatekeeper;
use tracing::{trace, warn};

/// Everything extracted from one document
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Subject from the `ASIGNATURA` header
    pub subject: String,
    /// Source from the `ORIGEN` header
    pub source: String,
    /// Questions that passed the commit check, in document order
    pub questions: Vec<DraftQuestion>,
    /// Question blocks dropped by the commit check
    pub dropped: usize,
}

impl ParsedDocument {
    /// The group these questions belong to
    pub fn group(&self) -> GroupKey {
        GroupKey::new(&self.subject, &self.source)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    SeekingHeaders,
    InBody,
}

/// Line-by-line state machine that builds one question at a time.
///
/// Feed it every line of a document with [`Assembler::feed`], then call
/// [`Assembler::finish`].
pub struct Assembler<'g> {
    gatekeeper: &'g Gatekeeper,
    phase: Phase,
    subject: Option<String>,
    source: Option<String>,
    current: Option<DraftQuestion>,
    committed: Vec<DraftQuestion>,
    dropped: usize,
}

impl<'g> Assembler<'g> {
    /// Create an assembler that commits through the given gatekeeper
    pub fn new(gatekeeper: &'g Gatekeeper) -> Self {
        Self {
            gatekeeper,
            phase: Phase::SeekingHeaders,
            subject: None,
            source: None,
            current: None,
            committed: Vec::new(),
            dropped: 0,
        }
    }

    /// Process the next line
    pub fn feed(&mut self, line: &str) {
        match self.phase {
            Phase::SeekingHeaders => self.seek_headers(line),
            Phase::InBody => self.body_line(line),
        }
    }

    /// Commit the last question and return the result.
    ///
    /// `document` names the input in the error when a header is missing.
    pub fn finish(mut self, document: &str) -> Result<ParsedDocument, ExtractorError> {
        let (Some(subject), Some(source)) = (self.subject.take(), self.source.take()) else {
            return Err(ExtractorError::MissingHeader(document.to_string()));
        };
        if let Some(question) = self.current.take() {
            self.commit(question);
        }

        Ok(ParsedDocument {
            subject,
            source,
            questions: self.committed,
            dropped: self.dropped,
        })
    }

    fn seek_headers(&mut self, line: &str) {
        if self.subject.is_none() {
            if let Some(LineMatch::Subject(subject)) = Rule::Subject.apply(line) {
                self.subject = Some(subject);
                self.enter_body_if_ready();
                return;
            }
        }
        if self.source.is_none() {
            if let Some(LineMatch::Source(source)) = Rule::Source.apply(line) {
                self.source = Some(source);
                self.enter_body_if_ready();
                return;
            }
        }
        trace!("header phase, skipped: {}", line);
    }

    fn enter_body_if_ready(&mut self) {
        if self.subject.is_some() && self.source.is_some() {
            self.phase = Phase::InBody;
        }
    }

    fn body_line(&mut self, line: &str) {
        let Some(matched) = classify_body(line) else {
            trace!("unrecognized: {}", line);
            return;
        };

        if let LineMatch::QuestionHeader(stem) = matched {
            if let Some(previous) = self.current.replace(DraftQuestion::new(stem)) {
                self.commit(previous);
            }
            return;
        }

        let Some(question) = self.current.as_mut() else {
            trace!("outside a question: {}", line);
            return;
        };
        match matched {
            LineMatch::Option { letter, text } => {
                question.options.push(AnswerOption::new(letter, text));
            }
            LineMatch::Answer { letter, raw } => {
                if let Some(letter) = letter {
                    question.answer = letter.to_string();
                }
                question.original_answer = Some(raw);
            }
            LineMatch::Reference(text) => question.reference = text,
            LineMatch::Explanation(text) => question.explanation = text,
            LineMatch::QuestionHeader(_) | LineMatch::Subject(_) | LineMatch::Source(_) => {}
        }
    }

    fn commit(&mut self, mut question: DraftQuestion) {
        match self.gatekeeper.check_commit(&question) {
            Ok(()) => {
                question.sort_options();
                self.committed.push(question);
            }
            Err(reason) => {
                warn!("Question dropped: {} ({})", reason, question.stem);
                self.dropped += 1;
            }
        }
    }
}
