/*!
 * Stammering detection for generated translations.
 *
 * Stammering is non-natural repetition in machine-translated output:
 * elongated characters, words repeated in immediate succession, looping
 * phrases, or a word recurring far more often than the source justifies.
 * Detection is a pure function over the two sentences; it holds no state
 * and never fails.
 */

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Punctuation stripped from token edges before comparison
const TOKEN_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Default minimum run of one character that counts as elongation
const DEFAULT_ELONGATION_RUN: usize = 6;

/// Default maximum token length exempt from word-repetition checks
const DEFAULT_SHORT_TOKEN_LEN: usize = 2;

/// Default count a word must exceed before frequency comparison applies
const DEFAULT_FREQUENCY_FLOOR: usize = 3;

/// Default multiplier over the source-side count that flags a word
const DEFAULT_FREQUENCY_RATIO: usize = 3;

/// The repetition rule that flagged a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StammerRule {
    /// A single character repeated in a long consecutive run
    CharacterElongation,
    /// The same word three times in immediate succession
    TripleWordRepeat,
    /// The same two-word phrase recurring in the sentence
    RepeatedBigram,
    /// A word recurring far more often than in the source
    DisproportionateFrequency,
}

impl std::fmt::Display for StammerRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StammerRule::CharacterElongation => write!(f, "character elongation"),
            StammerRule::TripleWordRepeat => write!(f, "triple word repetition"),
            StammerRule::RepeatedBigram => write!(f, "repeated bigram"),
            StammerRule::DisproportionateFrequency => {
                write!(f, "disproportionate word frequency")
            }
        }
    }
}

/// Configuration for stammering detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StammerConfig {
    /// Minimum consecutive identical characters that count as elongation
    #[serde(default = "default_elongation_run")]
    pub elongation_run: usize,

    /// Tokens at or below this length are exempt from word-repetition rules
    #[serde(default = "default_short_token_len")]
    pub short_token_len: usize,

    /// Absolute count a word must exceed before frequency comparison applies
    #[serde(default = "default_frequency_floor")]
    pub frequency_floor: usize,

    /// Multiplier over the source-side count that flags a word
    #[serde(default = "default_frequency_ratio")]
    pub frequency_ratio: usize,

    /// Suppress word and phrase rules when the source sentence itself shows
    /// the same repetition pattern
    #[serde(default)]
    pub source_aware_suppression: bool,
}

fn default_elongation_run() -> usize {
    DEFAULT_ELONGATION_RUN
}

fn default_short_token_len() -> usize {
    DEFAULT_SHORT_TOKEN_LEN
}

fn default_frequency_floor() -> usize {
    DEFAULT_FREQUENCY_FLOOR
}

fn default_frequency_ratio() -> usize {
    DEFAULT_FREQUENCY_RATIO
}

impl Default for StammerConfig {
    fn default() -> Self {
        Self {
            elongation_run: DEFAULT_ELONGATION_RUN,
            short_token_len: DEFAULT_SHORT_TOKEN_LEN,
            frequency_floor: DEFAULT_FREQUENCY_FLOOR,
            frequency_ratio: DEFAULT_FREQUENCY_RATIO,
            source_aware_suppression: false,
        }
    }
}

/// Stammering detector for translated sentences
pub struct StammerDetector {
    config: StammerConfig,
}

impl StammerDetector {
    /// Create a detector with the default configuration
    pub fn new() -> Self {
        Self {
            config: StammerConfig::default(),
        }
    }

    /// Create a detector with a custom configuration
    pub fn with_config(config: StammerConfig) -> Self {
        Self { config }
    }

    /// Check whether the translation exhibits stammering
    pub fn detect(&self, source_sentence: &str, translated_sentence: &str) -> bool {
        self.analyze(source_sentence, translated_sentence).is_some()
    }

    /// Return the first rule that flags the translation, if any
    ///
    /// Rules are evaluated in a fixed order and short-circuit on the first
    /// hit: character elongation, triple word repetition, repeated bigram,
    /// disproportionate frequency.
    pub fn analyze(
        &self,
        source_sentence: &str,
        translated_sentence: &str,
    ) -> Option<StammerRule> {
        let translated_lower = translated_sentence.to_lowercase();
        let translated_tokens: Vec<&str> = translated_lower.split_whitespace().collect();

        // No tokens, no repetition possible
        if translated_tokens.is_empty() {
            return None;
        }

        let source_lower = source_sentence.to_lowercase();
        let source_tokens: Vec<&str> = source_lower.split_whitespace().collect();

        let translated_stripped: Vec<&str> = translated_tokens
            .iter()
            .map(|token| strip_token(token))
            .collect();
        let source_stripped: Vec<&str> = source_tokens
            .iter()
            .map(|token| strip_token(token))
            .collect();

        if self.has_elongation(&translated_lower) {
            debug!("Stammer: character elongation in '{}'", translated_lower);
            return Some(StammerRule::CharacterElongation);
        }

        if self.has_triple_repeat(&translated_stripped)
            && !(self.config.source_aware_suppression
                && self.has_triple_repeat(&source_stripped))
        {
            return Some(StammerRule::TripleWordRepeat);
        }

        if self.has_repeated_bigram(&translated_tokens)
            && !(self.config.source_aware_suppression
                && self.has_repeated_bigram(&source_tokens))
        {
            return Some(StammerRule::RepeatedBigram);
        }

        if self.has_disproportionate_frequency(&source_stripped, &translated_stripped) {
            return Some(StammerRule::DisproportionateFrequency);
        }

        None
    }

    /// Rule 1: any single character repeated in a consecutive run
    ///
    /// Applied to the raw lowercased text, not tokens, so it also catches
    /// elongation spanning punctuation-free interjections.
    fn has_elongation(&self, text: &str) -> bool {
        let mut previous: Option<char> = None;
        let mut run = 0;

        for c in text.chars() {
            if previous == Some(c) {
                run += 1;
            } else {
                previous = Some(c);
                run = 1;
            }
            if run >= self.config.elongation_run {
                return true;
            }
        }

        false
    }

    /// Rule 2: the same word three times in immediate succession
    ///
    /// Short tokens are exempt so natural doubling ("bye bye") plus a
    /// trailing short word never fires.
    fn has_triple_repeat(&self, stripped: &[&str]) -> bool {
        stripped.windows(3).any(|window| {
            let word = window[0];
            word.chars().count() > self.config.short_token_len
                && window[1] == word
                && window[2] == word
        })
    }

    /// Rule 3: the same adjacent-token bigram occurring more than once
    ///
    /// Only applies when at least four tokens exist. Catches phrase-level
    /// looping such as "is nice is nice".
    fn has_repeated_bigram(&self, tokens: &[&str]) -> bool {
        if tokens.len() < 4 {
            return false;
        }

        let bigrams: Vec<String> = tokens
            .windows(2)
            .map(|window| format!("{} {}", window[0], window[1]))
            .collect();

        let mut seen: HashMap<&str, usize> = HashMap::new();
        for bigram in &bigrams {
            let count = seen.entry(bigram.as_str()).or_insert(0);
            *count += 1;
            if *count > 1 {
                return true;
            }
        }

        false
    }

    /// Rule 4: a word recurring far beyond its source-side frequency
    ///
    /// A source-side count of zero satisfies the ratio whenever the
    /// translation-side count exceeds the floor.
    fn has_disproportionate_frequency(
        &self,
        source_stripped: &[&str],
        translated_stripped: &[&str],
    ) -> bool {
        let source_counts = self.count_frequencies(source_stripped);
        let translated_counts = self.count_frequencies(translated_stripped);

        translated_counts.iter().any(|(word, &count)| {
            let source_count = source_counts.get(word).copied().unwrap_or(0);
            count > self.config.frequency_floor
                && count >= self.config.frequency_ratio * source_count
        })
    }

    /// Count per-token frequency, ignoring short tokens
    fn count_frequencies<'a>(&self, stripped: &[&'a str]) -> HashMap<&'a str, usize> {
        let mut counts = HashMap::new();
        for word in stripped {
            if word.chars().count() > self.config.short_token_len {
                *counts.entry(*word).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl Default for StammerDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip leading and trailing punctuation from a token
fn strip_token(token: &str) -> &str {
    token.trim_matches(TOKEN_PUNCTUATION)
}

/// Check a translation for stammering with the default configuration
///
/// Deterministic and total over any pair of strings, including empty ones.
pub fn detect_stammer(source_sentence: &str, translated_sentence: &str) -> bool {
    StammerDetector::new().detect(source_sentence, translated_sentence)
}
