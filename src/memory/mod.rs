/*!
 * Translation memory: storage and bidirectional retrieval of example
 * translation pairs over an embedding index.
 *
 * This module is split into two submodules:
 *
 * - `models`: Translation pair and search result types
 * - `store`: The translation memory service with the search/merge algorithm
 */

// Re-export main types for easier usage
pub use self::models::{ExamplePair, TranslationPair, DEFAULT_SEARCH_LIMIT};
pub use self::store::TranslationMemory;

// Submodules
pub mod models;
pub mod store;
