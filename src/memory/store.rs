/*!
 * Translation memory service.
 *
 * Stores translation pairs in an embedding index and retrieves ranked
 * example pairs for a query sentence. Retrieval is bidirectional: a pair
 * stored as en -> it is valid evidence for an it -> en task with its fields
 * swapped, so a search covers the requested direction and its inverse,
 * favoring exact-direction matches.
 */

use log::debug;
use std::collections::HashSet;

use crate::errors::MemoryError;
use crate::index::{EmbeddingIndex, MetadataFilter};

use super::models::{
    ExamplePair, TranslationPair, KEY_SOURCE_LANGUAGE, KEY_TARGET_LANGUAGE,
};

/// Translation memory over an embedding index backend
///
/// The index is injected at construction; any backend implementing
/// `EmbeddingIndex` can serve as storage. Calls are independent and need no
/// coordination beyond what the index itself guarantees.
#[derive(Debug)]
pub struct TranslationMemory<I: EmbeddingIndex> {
    /// The embedding index backend
    index: I,
}

impl<I: EmbeddingIndex> TranslationMemory<I> {
    /// Create a translation memory over the given index
    pub fn new(index: I) -> Self {
        Self { index }
    }

    /// Access the underlying index
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Add a translation pair to the memory
    ///
    /// All four fields must be non-empty. The pair is stored under a fresh
    /// unique identifier with the sentence as the embedded document, so
    /// identical content added twice creates two distinct records.
    ///
    /// # Arguments
    /// * `source_language` - Language code of the sentence
    /// * `target_language` - Language code of the translation
    /// * `sentence` - Source sentence text
    /// * `translation` - Translation text
    ///
    /// # Returns
    /// * `Result<(), MemoryError>` - Ok on success, a validation error for
    ///   malformed input, or a propagated index error
    pub async fn add_pair(
        &self,
        source_language: &str,
        target_language: &str,
        sentence: &str,
        translation: &str,
    ) -> Result<(), MemoryError> {
        require_non_empty(source_language, "source_language")?;
        require_non_empty(target_language, "target_language")?;
        require_non_empty(sentence, "sentence")?;
        require_non_empty(translation, "translation")?;

        let pair = TranslationPair::new(source_language, target_language, sentence, translation);

        debug!(
            "Adding pair {} ({} -> {}): '{}'",
            pair.id,
            source_language,
            target_language,
            truncate_text(sentence, 30)
        );

        self.index
            .store(&pair.id, &pair.sentence, pair.to_metadata())
            .await?;

        Ok(())
    }

    /// Search for example pairs similar to the query sentence
    ///
    /// Issues one similarity query for the requested direction and one for
    /// its inverse, each asking for twice the limit in candidates, then
    /// merges them: direct matches first in rank order, then reverse matches
    /// with sentence and translation swapped, deduplicated by content. An
    /// empty result is a normal outcome, not an error.
    ///
    /// # Arguments
    /// * `query_sentence` - The sentence to find examples for
    /// * `source_language` - Requested source language code
    /// * `target_language` - Requested target language code
    /// * `limit` - Maximum number of examples to return
    ///
    /// # Returns
    /// * `Result<Vec<ExamplePair>, MemoryError>` - At most `limit` examples,
    ///   or a propagated index error
    pub async fn search_similar(
        &self,
        query_sentence: &str,
        source_language: &str,
        target_language: &str,
        limit: usize,
    ) -> Result<Vec<ExamplePair>, MemoryError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let candidate_count = limit.saturating_mul(2);

        let direct_filter = MetadataFilter::new()
            .with_eq(KEY_SOURCE_LANGUAGE, source_language)
            .with_eq(KEY_TARGET_LANGUAGE, target_language);
        let reverse_filter = MetadataFilter::new()
            .with_eq(KEY_SOURCE_LANGUAGE, target_language)
            .with_eq(KEY_TARGET_LANGUAGE, source_language);

        let direct_set = self
            .index
            .query(query_sentence, candidate_count, &direct_filter)
            .await?;
        let reverse_set = self
            .index
            .query(query_sentence, candidate_count, &reverse_filter)
            .await?;

        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut results: Vec<ExamplePair> = Vec::with_capacity(limit);

        // Direct matches keep their stored orientation and always precede
        // reverse matches in the result.
        for candidate in &direct_set {
            if results.len() == limit {
                break;
            }
            let Some(pair) = ExamplePair::from_metadata(&candidate.metadata) else {
                continue;
            };
            if seen.insert((pair.sentence.clone(), pair.translation.clone())) {
                results.push(pair);
            }
        }

        if results.len() < limit {
            for candidate in &reverse_set {
                if results.len() == limit {
                    break;
                }
                let Some(pair) = ExamplePair::from_metadata_swapped(&candidate.metadata) else {
                    continue;
                };
                if seen.insert((pair.sentence.clone(), pair.translation.clone())) {
                    results.push(pair);
                }
            }
        }

        debug!(
            "Search '{}' ({} -> {}): {} direct + {} reverse candidates, {} results",
            truncate_text(query_sentence, 30),
            source_language,
            target_language,
            direct_set.len(),
            reverse_set.len(),
            results.len()
        );

        Ok(results)
    }
}

/// Reject empty or whitespace-only field values
fn require_non_empty(value: &str, field: &str) -> Result<(), MemoryError> {
    if value.trim().is_empty() {
        return Err(MemoryError::Validation(format!(
            "Field '{}' must not be empty",
            field
        )));
    }
    Ok(())
}

/// Truncate text for log output
fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_length).collect();
        format!("{}...", truncated)
    }
}
