//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document path does not exist
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input directory does not exist
    #[error("Input directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Subject or source header never appeared
    #[error("Missing ASIGNATURA/ORIGEN headers in {0}")]
    MissingHeader(String),

    /// Document could not be parsed as .docx
    #[error("Invalid document {path}: {reason}")]
    Docx {
        /// Document path
        path: String,
        /// Parser message
        reason: String,
    },

    /// I/O error while reading a document or directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
