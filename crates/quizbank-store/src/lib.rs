//! Quizbank Storage Layer
//!
//! Maintains the single JSON question bank and exposes the read-side helpers
//! the quiz front end uses.
//!
//! # Architecture
//!
//! - [`JsonBank`] is the only writer of the bank file. Every build is a
//!   read-modify-write: validate, load, drop the group (replace mode), number
//!   new questions, sort by ID, write.
//! - [`merge`] holds the pure numbering/merge step over an in-memory
//!   [`Bank`](quizbank_domain::Bank).
//! - [`catalog`] reads the bank for consumers: load, filter, sample, count.
//!
//! # Concurrency
//!
//! The read-modify-write is not synchronized. Two processes building into
//! the same file at once can lose updates (last write wins).
//!
//! # Examples
//!
//! ```no_run
//! use quizbank_store::{BuildMode, JsonBank};
//!
//! let bank = JsonBank::new("data/preguntas.json");
//! let ok = bank.build("Bases de Datos", "Test 1", &[], BuildMode::Replace);
//! assert!(!ok); // nothing valid to store
//! ```

#![warn(missing_docs)]

mod bank;
pub mod catalog;
mod error;
pub mod merge;

pub use bank::JsonBank;
pub use catalog::{
    count_by_subject, filter_by_subject, load_questions, pick_random, pick_random_with, subjects,
    SubjectCounts,
};
pub use error::StoreError;
pub use merge::{merge_group, BuildMode, BuildReport};
