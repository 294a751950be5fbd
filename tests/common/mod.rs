/*!
 * Common test utilities for the ragmem test suite
 */

use ragmem::{InMemoryIndex, TranslationMemory};


/// Initialize test logging once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample pairs used across tests: (source_language, target_language,
/// sentence, translation)
pub fn sample_pairs() -> Vec<(&'static str, &'static str, &'static str, &'static str)> {
    vec![
        ("en", "it", "Good morning", "Buongiorno"),
        ("en", "it", "Good evening", "Buonasera"),
        ("en", "it", "How are you?", "Come stai?"),
        ("it", "en", "Buonanotte", "Good night"),
        ("it", "en", "Grazie mille", "Thank you very much"),
        ("en", "de", "Good morning", "Guten Morgen"),
    ]
}

/// Build a translation memory over a fresh in-memory index
pub fn empty_memory() -> TranslationMemory<InMemoryIndex> {
    TranslationMemory::new(InMemoryIndex::new())
}

/// Build a translation memory seeded with the sample pairs
pub async fn seeded_memory() -> TranslationMemory<InMemoryIndex> {
    let memory = empty_memory();
    for (source_language, target_language, sentence, translation) in sample_pairs() {
        memory
            .add_pair(source_language, target_language, sentence, translation)
            .await
            .expect("seeding the test memory should not fail");
    }
    memory
}
