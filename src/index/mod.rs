/*!
 * Embedding index abstraction for similarity search.
 *
 * This module defines the interface that all embedding index backends must
 * follow, allowing them to be used interchangeably by the translation memory.
 * Any vector-similarity backend that can store a document with key/value
 * metadata and answer filtered nearest-neighbor queries satisfies the
 * contract.
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::errors::IndexError;

/// A single match returned by a similarity query
#[derive(Debug, Clone)]
pub struct IndexMatch {
    /// Identifier of the stored record
    pub id: String,

    /// Similarity score under the index's own metric (higher is closer)
    pub score: f32,

    /// Metadata stored alongside the document
    pub metadata: HashMap<String, String>,
}

/// Conjunction of exact-match predicates over record metadata
///
/// An empty filter matches every record. Clauses are combined with AND:
/// a record matches only if every `(key, value)` clause equals the record's
/// metadata entry for that key.
#[derive(Debug, Clone, Default)]
pub struct MetadataFilter {
    clauses: Vec<(String, String)>,
}

impl MetadataFilter {
    /// Create an empty filter that matches all records
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exact-match clause for a metadata key
    pub fn with_eq(mut self, key: &str, value: &str) -> Self {
        self.clauses.push((key.to_string(), value.to_string()));
        self
    }

    /// Check whether the given metadata satisfies every clause
    pub fn matches(&self, metadata: &HashMap<String, String>) -> bool {
        self.clauses
            .iter()
            .all(|(key, value)| metadata.get(key).is_some_and(|v| v == value))
    }

    /// Number of clauses in the filter
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the filter has no clauses
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// Common trait for all embedding index backends
///
/// This trait defines the interface that the translation memory consumes.
/// Implementations must provide atomic per-document writes and
/// read-after-write visibility for queries issued by the same caller.
#[async_trait]
pub trait EmbeddingIndex: Send + Sync + Debug {
    /// Store one document with its metadata under a unique identifier
    ///
    /// # Arguments
    /// * `id` - Unique, opaque record identifier
    /// * `document` - The text to embed and index
    /// * `metadata` - Arbitrary key/value metadata returned by queries
    ///
    /// # Returns
    /// * `Result<(), IndexError>` - Ok on success, or a storage error
    async fn store(
        &self,
        id: &str,
        document: &str,
        metadata: HashMap<String, String>,
    ) -> Result<(), IndexError>;

    /// Return the k nearest documents to the query text
    ///
    /// Results are ranked by the index's own similarity metric, descending.
    /// Only records satisfying the filter are considered. Fewer than `k`
    /// matches is a normal outcome, not an error.
    async fn query(
        &self,
        text: &str,
        k: usize,
        filter: &MetadataFilter,
    ) -> Result<Vec<IndexMatch>, IndexError>;
}

pub mod memory;
pub mod similarity;

pub use memory::InMemoryIndex;
