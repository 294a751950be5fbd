/*!
 * # ragmem - Retrieval-Augmented Translation Memory
 *
 * A Rust library for retrieval-augmented translation workflows: store
 * example translation pairs, retrieve the pairs most similar to a query
 * sentence, assemble them into a prompt for an external generator, and
 * flag stammering (pathological repetition) in generated output.
 *
 * ## Features
 *
 * - Append-only translation pair storage over a pluggable embedding index
 * - Bidirectional similarity search: a pair stored as en -> it also serves
 *   it -> en queries with its fields swapped, direct matches ranked first
 * - Content-level deduplication of search results
 * - Rule-based stammering detection for generated translations
 * - Prompt assembly from retrieved examples
 * - ISO 639-1 and ISO 639-3 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `index`: Embedding index abstraction and backends:
 *   - `index::memory`: In-memory backend with lexical ranking
 *   - `index::similarity`: Lexical similarity scoring
 * - `memory`: Translation memory storage and retrieval:
 *   - `memory::models`: Translation pair and search result types
 *   - `memory::store`: Bidirectional search and merge
 * - `stammer`: Stammering detection heuristics
 * - `prompt`: Prompt assembly from search results
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod errors;
pub mod index;
pub mod language_utils;
pub mod memory;
pub mod prompt;
pub mod stammer;

// Re-export main types for easier usage
pub use errors::{IndexError, MemoryError};
pub use index::{EmbeddingIndex, InMemoryIndex, IndexMatch, MetadataFilter};
pub use language_utils::{display_language_name, language_name};
pub use memory::{ExamplePair, TranslationMemory, TranslationPair, DEFAULT_SEARCH_LIMIT};
pub use prompt::{PromptTemplate, TranslationPromptBuilder};
pub use stammer::{detect_stammer, StammerConfig, StammerDetector, StammerRule};
