/*!
 * Unit tests for prompt assembly.
 */

use ragmem::{ExamplePair, TranslationPromptBuilder};

#[test]
fn test_build_shouldResolveLanguageNames() {
    let prompt = TranslationPromptBuilder::new("en", "it").build("Hello");

    assert!(prompt.starts_with("You are a translator from English to Italian."));
}

#[test]
fn test_build_shouldEndWithQuerySentence() {
    let prompt = TranslationPromptBuilder::new("en", "it").build("Where is the station?");

    assert!(prompt.ends_with("Now translate: \"Where is the station?\""));
}

#[test]
fn test_build_withExamples_shouldRenderOneBulletPerExample() {
    let prompt = TranslationPromptBuilder::new("en", "it")
        .with_examples(vec![
            ExamplePair::new("Good morning", "Buongiorno"),
            ExamplePair::new("Good evening", "Buonasera"),
        ])
        .build("Good night");

    assert!(prompt.contains("Here are some similar translation examples:"));
    assert!(prompt.contains("- \"Good morning\" → \"Buongiorno\""));
    assert!(prompt.contains("- \"Good evening\" → \"Buonasera\""));

    // Examples keep their rank order
    let first = prompt.find("Good morning").unwrap();
    let second = prompt.find("Good evening").unwrap();
    assert!(first < second);
}

#[test]
fn test_build_withoutExamples_shouldStayMinimal() {
    let prompt = TranslationPromptBuilder::new("de", "fr").build("Guten Tag");

    assert_eq!(
        prompt,
        "You are a translator from German to French.\n\nNow translate: \"Guten Tag\""
    );
}
