use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module resolves ISO 639-1 (2-letter) and ISO 639-3 (3-letter)
/// language codes to English language names for prompt text.
/// Look up the English name for a language code
///
/// Returns None when the code is not a known ISO 639-1 or ISO 639-3 code.
pub fn language_name(code: &str) -> Option<String> {
    let normalized = code.trim().to_lowercase();

    match normalized.len() {
        2 => Language::from_639_1(&normalized).map(|lang| lang.to_name().to_string()),
        3 => Language::from_639_3(&normalized).map(|lang| lang.to_name().to_string()),
        _ => None,
    }
}

/// Resolve a display name for a language code
///
/// Falls back to the uppercased code when the code is unknown, so prompts
/// stay readable for custom or malformed codes.
pub fn display_language_name(code: &str) -> String {
    language_name(code).unwrap_or_else(|| code.trim().to_uppercase())
}
