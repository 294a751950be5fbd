/*!
 * Data model for the translation memory.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Default number of example pairs returned by a similarity search
pub const DEFAULT_SEARCH_LIMIT: usize = 4;

/// Metadata key for the stored source language code
pub(crate) const KEY_SOURCE_LANGUAGE: &str = "source_language";

/// Metadata key for the stored target language code
pub(crate) const KEY_TARGET_LANGUAGE: &str = "target_language";

/// Metadata key for the stored source sentence
pub(crate) const KEY_SENTENCE: &str = "sentence";

/// Metadata key for the stored translation
pub(crate) const KEY_TRANSLATION: &str = "translation";

/// A stored translation pair
///
/// Pairs are immutable once stored: there is no update operation, only
/// create. The identifier is unique; no other field is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPair {
    /// Unique, opaque identifier
    pub id: String,

    /// Source language code (short token, e.g. "en")
    pub source_language: String,

    /// Target language code
    pub target_language: String,

    /// Source sentence text
    pub sentence: String,

    /// Translation text
    pub translation: String,
}

impl TranslationPair {
    /// Create a pair with a fresh unique identifier
    ///
    /// Two calls with identical arguments produce two distinct pairs.
    pub fn new(
        source_language: &str,
        target_language: &str,
        sentence: &str,
        translation: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            sentence: sentence.to_string(),
            translation: translation.to_string(),
        }
    }

    /// Render the full pair as index metadata
    pub fn to_metadata(&self) -> HashMap<String, String> {
        let mut metadata = HashMap::new();
        metadata.insert(KEY_SOURCE_LANGUAGE.to_string(), self.source_language.clone());
        metadata.insert(KEY_TARGET_LANGUAGE.to_string(), self.target_language.clone());
        metadata.insert(KEY_SENTENCE.to_string(), self.sentence.clone());
        metadata.insert(KEY_TRANSLATION.to_string(), self.translation.clone());
        metadata
    }
}

/// A single search result entry: a sentence and its translation
///
/// Reverse-direction matches are emitted with the stored fields swapped, so
/// `sentence` is always in the requested source language and `translation`
/// in the requested target language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExamplePair {
    /// Sentence in the requested source language
    pub sentence: String,

    /// Translation in the requested target language
    pub translation: String,
}

impl ExamplePair {
    /// Create an example pair
    pub fn new(sentence: &str, translation: &str) -> Self {
        Self {
            sentence: sentence.to_string(),
            translation: translation.to_string(),
        }
    }

    /// Read an example from stored metadata, keeping the stored orientation
    ///
    /// Returns None when either text field is missing from the metadata.
    pub(crate) fn from_metadata(metadata: &HashMap<String, String>) -> Option<Self> {
        Some(Self {
            sentence: metadata.get(KEY_SENTENCE)?.clone(),
            translation: metadata.get(KEY_TRANSLATION)?.clone(),
        })
    }

    /// Read an example from stored metadata with sentence and translation
    /// swapped, for reverse-direction matches
    pub(crate) fn from_metadata_swapped(metadata: &HashMap<String, String>) -> Option<Self> {
        Some(Self {
            sentence: metadata.get(KEY_TRANSLATION)?.clone(),
            translation: metadata.get(KEY_SENTENCE)?.clone(),
        })
    }
}
