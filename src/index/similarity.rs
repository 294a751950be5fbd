/*!
 * Lexical similarity scoring for the in-memory index.
 *
 * Ranks documents against a query with a blend of normalized Levenshtein
 * distance (character level) and Dice overlap of whitespace tokens
 * (word level). The score is a stand-in for a vector-similarity metric:
 * deterministic, case-insensitive, and 1.0 for identical text.
 */

use std::collections::HashSet;

/// Score a document against a query, in the range 0.0 to 1.0
///
/// Identical text (after lowercasing) scores exactly 1.0, so a query for a
/// previously stored sentence always ranks that sentence first.
pub fn lexical_score(query: &str, document: &str) -> f32 {
    let query = query.to_lowercase();
    let document = document.to_lowercase();

    if query == document {
        return 1.0;
    }
    if query.is_empty() || document.is_empty() {
        return 0.0;
    }

    let char_sim = char_similarity(&query, &document);
    let token_sim = token_overlap(&query, &document);

    (char_sim + token_sim) / 2.0
}

/// Normalized Levenshtein similarity between two strings
fn char_similarity(a: &str, b: &str) -> f32 {
    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    1.0 - (distance as f32 / max_len as f32)
}

/// Dice coefficient over the sets of whitespace tokens
fn token_overlap(a: &str, b: &str) -> f32 {
    let tokens_a: HashSet<&str> = a.split_whitespace().collect();
    let tokens_b: HashSet<&str> = b.split_whitespace().collect();

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 1.0;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let shared = tokens_a.intersection(&tokens_b).count();
    (2 * shared) as f32 / (tokens_a.len() + tokens_b.len()) as f32
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Two-row optimization for space efficiency
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr_row[0] = i;

        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };

            curr_row[j] = (prev_row[j] + 1)
                .min(curr_row[j - 1] + 1)
                .min(prev_row[j - 1] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}
