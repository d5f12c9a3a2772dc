//! Error types for the storage layer

use thiserror::Error;

/// Errors that can occur while building or reading the bank
#[derive(Error, Debug)]
pub enum StoreError {
    /// Every question of the batch failed validation
    #[error("No valid questions for {0}")]
    NoValidQuestions(String),

    /// No sequence number is left for an ID prefix
    #[error("ID sequence exhausted for prefix {0}")]
    SequenceExhausted(String),

    /// I/O error reading or writing the bank file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bank could not be serialized or parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
