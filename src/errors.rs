/*!
 * Error types for the ragmem library.
 *
 * This module contains custom error types for the translation memory and
 * the embedding index boundary, using the thiserror crate for ergonomic
 * error definitions.
 */

use thiserror::Error;

/// Errors that can occur when talking to an embedding index backend
#[derive(Error, Debug)]
pub enum IndexError {
    /// Error when writing a record to the index fails
    #[error("Failed to store record: {0}")]
    StoreFailed(String),

    /// Error when a similarity query fails
    #[error("Similarity query failed: {0}")]
    QueryFailed(String),

    /// Error when the index backend cannot be reached at all
    #[error("Index unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur in the translation memory
#[derive(Error, Debug)]
pub enum MemoryError {
    /// A translation pair was rejected before reaching the index
    #[error("Invalid translation pair: {0}")]
    Validation(String),

    /// Error propagated from the underlying embedding index
    #[error("Embedding index error: {0}")]
    Index(#[from] IndexError),
}

impl From<anyhow::Error> for IndexError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unavailable(error.to_string())
    }
}
