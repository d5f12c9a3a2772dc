//! Quizbank Domain Layer
//!
//! This crate contains the data model shared by every other crate in the
//! workspace: the question records produced by the extractor, the persisted
//! question bank, and the group/ID scheme used to number questions.
//!
//! ## Key Concepts
//!
//! - **Group**: a `(subject, source)` pair, the unit of replace/append and of
//!   ID numbering
//! - **Draft question**: a question as assembled from a document, before it
//!   has an ID
//! - **Question**: a persisted question with its ID, subject and source
//! - **Bank**: the flat, ID-sorted collection of every persisted question
//!
//! ## Wire format
//!
//! Field names are kept in Spanish on the wire (`enunciado`, `opciones`,
//! `respuesta_correcta`, ...) because the quiz front end reads the bank file
//! directly. The Rust field names are English.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bank;
pub mod group;
pub mod question;
pub mod text;

// Re-exports for convenience
pub use bank::Bank;
pub use group::{initials, GroupKey, SEQUENCE_WIDTH};
pub use question::{AnswerOption, DraftQuestion, Question, MERGE_LETTERS};
pub use text::clean_text;
