/*!
 * In-memory embedding index backend.
 *
 * This module provides an in-process index suitable for tests and small
 * deployments. Records live in an insertion-ordered list behind a RwLock;
 * queries rank candidates with the lexical similarity score. Writes are
 * atomic per record and immediately visible to subsequent queries.
 */

use log::debug;
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;

use super::similarity::lexical_score;
use super::{EmbeddingIndex, IndexMatch, MetadataFilter};
use crate::errors::IndexError;

/// A stored record: document text plus its metadata
#[derive(Debug, Clone)]
struct StoredRecord {
    id: String,
    document: String,
    metadata: HashMap<String, String>,
}

/// In-memory index backend
///
/// Ranking ties are broken by insertion order, oldest first.
#[derive(Debug, Default)]
pub struct InMemoryIndex {
    records: RwLock<Vec<StoredRecord>>,
}

impl InMemoryIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the index holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl EmbeddingIndex for InMemoryIndex {
    async fn store(
        &self,
        id: &str,
        document: &str,
        metadata: HashMap<String, String>,
    ) -> Result<(), IndexError> {
        let mut records = self.records.write();
        records.push(StoredRecord {
            id: id.to_string(),
            document: document.to_string(),
            metadata,
        });

        debug!("Stored record {} ({} total)", id, records.len());

        Ok(())
    }

    async fn query(
        &self,
        text: &str,
        k: usize,
        filter: &MetadataFilter,
    ) -> Result<Vec<IndexMatch>, IndexError> {
        if k == 0 {
            return Ok(Vec::new());
        }

        let records = self.records.read();

        let mut matches: Vec<IndexMatch> = records
            .iter()
            .filter(|record| filter.matches(&record.metadata))
            .map(|record| IndexMatch {
                id: record.id.clone(),
                score: lexical_score(text, &record.document),
                metadata: record.metadata.clone(),
            })
            .collect();

        // Stable sort keeps insertion order among equal scores
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches.truncate(k);

        debug!(
            "Query over {} records returned {} matches (k={})",
            records.len(),
            matches.len(),
            k
        );

        Ok(matches)
    }
}
