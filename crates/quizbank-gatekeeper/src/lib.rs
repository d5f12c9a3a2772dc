//! Quizbank Gatekeeper
//!
//! Structural validation for questions before they are accepted.
//!
//! Two passes with different strictness run at different pipeline stages:
//!
//! - **Commit check** ([`Gatekeeper::check_commit`]): applied by the
//!   extractor when a question block ends. Any failure drops the question.
//! - **Merge validation** ([`Gatekeeper::validate_for_merge`]): applied by the
//!   bank builder before persisting. Only structural failures (option count,
//!   letter set) drop the question; an unresolvable answer is cleared and the
//!   question is kept as unscored.
//!
//! # Examples
//!
//! ```
//! use quizbank_domain::{AnswerOption, DraftQuestion};
//! use quizbank_gatekeeper::Gatekeeper;
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let mut q = DraftQuestion::new("¿Qué es SQL?");
//! q.options = vec![
//!     AnswerOption::new('A', "Un lenguaje"),
//!     AnswerOption::new('B', "Un motor"),
//!     AnswerOption::new('C', "Un fichero"),
//! ];
//! q.answer = "A".to_string();
//!
//! assert!(gatekeeper.check_commit(&q).is_ok());
//! ```

#![warn(missing_docs)]

mod config;
mod validator;

pub use config::ValidationConfig;
pub use validator::{
    AnswerStatus, Gatekeeper, MergeValidation, RejectionReason, ValidationResult,
};
