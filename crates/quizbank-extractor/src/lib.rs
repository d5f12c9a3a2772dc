//! Quizbank Extractor
//!
//! Converts semi-structured quiz documents (`.docx`) into draft questions.
//!
//! # Overview
//!
//! Authors write quizzes as free-form paragraphs following loose textual
//! conventions: an `ASIGNATURA:` and an `ORIGEN:` header, then blocks that
//! start with `PREGUNTA n.` followed by options, the correct answer, and an
//! optional reference and explanation. Two option styles are recognized:
//!
//! ```text
//! OPCIÓN 1 (A): Un campo único          • A) Un campo único
//! OPCIÓN 2 (B): Un campo repetido       • B) Un campo repetido
//! RESPUESTA CORRECTA: Opción 1 (A)      RESPUESTA CORRECTA: A
//! ```
//!
//! # Architecture
//!
//! ```text
//! .docx → document (lines) → patterns (classify) → assembler → Gatekeeper → ParsedDocument
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use quizbank_extractor::Extractor;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::default_config();
//! for path in extractor.discover("docs/docx".as_ref())? {
//!     let parsed = extractor.extract_file(&path)?;
//!     println!("{}: {} questions", parsed.group(), parsed.questions.len());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod assembler;
mod config;
mod discovery;
mod document;
mod error;
mod extractor;
pub mod patterns;

#[cfg(test)]
mod tests;

pub use assembler::{Assembler, ParsedDocument};
pub use config::ExtractorConfig;
pub use discovery::discover_documents;
pub use document::{read_lines, split_paragraphs};
pub use error::ExtractorError;
pub use extractor::Extractor;
