/*!
 * Prompt assembly for the external translation generator.
 *
 * Formats translation memory search results and a query sentence into an
 * instruction string. The assembler is deliberately thin: it does not talk
 * to any generator itself.
 */

use crate::language_utils::display_language_name;
use crate::memory::ExamplePair;

/// Template for the translator instruction header
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default instruction header for translation prompts.
    pub const TRANSLATOR: &'static str =
        "You are a translator from {source_language} to {target_language}.";

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default translator template.
    pub fn translator() -> Self {
        Self::new(Self::TRANSLATOR)
    }

    /// Render the template with the given language names.
    pub fn render(&self, source_language: &str, target_language: &str) -> String {
        self.template
            .replace("{source_language}", source_language)
            .replace("{target_language}", target_language)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::translator()
    }
}

/// Builder for translation prompts with retrieved examples.
#[derive(Debug, Clone)]
pub struct TranslationPromptBuilder {
    source_language: String,
    target_language: String,
    examples: Vec<ExamplePair>,
}

impl TranslationPromptBuilder {
    /// Create a new prompt builder for a language direction.
    ///
    /// Language codes are resolved to full names where known, with the
    /// uppercased code as fallback.
    pub fn new(source_language: &str, target_language: &str) -> Self {
        Self {
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            examples: Vec::new(),
        }
    }

    /// Set the retrieved example pairs, in rank order.
    pub fn with_examples(mut self, examples: Vec<ExamplePair>) -> Self {
        self.examples = examples;
        self
    }

    /// Build the prompt for a query sentence.
    ///
    /// The example section is omitted entirely when no examples were
    /// retrieved.
    pub fn build(&self, query_sentence: &str) -> String {
        let source_name = display_language_name(&self.source_language);
        let target_name = display_language_name(&self.target_language);

        let mut parts = vec![PromptTemplate::translator().render(&source_name, &target_name)];

        if !self.examples.is_empty() {
            parts.push("\nHere are some similar translation examples:".to_string());
            for example in &self.examples {
                parts.push(format!(
                    "- \"{}\" → \"{}\"",
                    example.sentence, example.translation
                ));
            }
        }

        parts.push(format!("\nNow translate: \"{}\"", query_sentence));

        parts.join("\n")
    }
}
