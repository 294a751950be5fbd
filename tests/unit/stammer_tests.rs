/*!
 * Unit tests for stammering detection.
 */

use ragmem::{detect_stammer, StammerConfig, StammerDetector, StammerRule};

#[test]
fn test_detectStammer_tripleWordRepeat_shouldFlag() {
    assert!(detect_stammer("Hello world", "hello hello hello world"));
}

#[test]
fn test_detectStammer_shortTokenTriple_shouldBeExempt() {
    assert!(!detect_stammer("Hi there", "hi hi there"));
}

#[test]
fn test_detectStammer_characterElongation_shouldFlag() {
    assert!(detect_stammer("I am happy", "I am soooooo happy"));
}

#[test]
fn test_detectStammer_elongationJustBelowRun_shouldNotFlag() {
    // Five consecutive characters is below the run threshold of six
    assert!(!detect_stammer("I am happy", "I am sooooo happy"));
}

#[test]
fn test_detectStammer_repeatedPhrase_shouldFlag() {
    assert!(detect_stammer(
        "The cat is nice",
        "the cat is nice the cat is nice"
    ));
}

#[test]
fn test_detectStammer_phraseLoop_shouldFlag() {
    assert!(detect_stammer("It is nice", "it is nice is nice"));
}

#[test]
fn test_detectStammer_disproportionateFrequency_shouldFlag() {
    assert!(detect_stammer("cat dog bird", "dog dog dog dog tree"));
}

#[test]
fn test_detectStammer_emptyInputs_shouldNotFlag() {
    assert!(!detect_stammer("", ""));
    assert!(!detect_stammer("Hello", ""));
    assert!(!detect_stammer("Hello", "   "));
}

#[test]
fn test_detectStammer_emptySource_shouldStillAnalyzeTranslation() {
    // The detector is total over any pair of strings
    assert!(detect_stammer("", "word word word again"));
    assert!(!detect_stammer("", "a perfectly normal sentence"));
}

#[test]
fn test_detectStammer_naturalDoubling_shouldNotFlag() {
    assert!(!detect_stammer("Goodbye", "bye bye now"));
    assert!(!detect_stammer("So so", "it was so so"));
}

#[test]
fn test_detectStammer_punctuatedRepeat_shouldStripBeforeComparing() {
    assert!(detect_stammer("Fine", "fine, fine. fine! really"));
}

#[test]
fn test_detectStammer_uppercaseRepeat_shouldLowercaseFirst() {
    assert!(detect_stammer("Hello world", "Hello HELLO hello world"));
}

#[test]
fn test_analyze_shouldShortCircuitInRuleOrder() {
    let detector = StammerDetector::new();

    assert_eq!(
        detector.analyze("hi", "nooooooo no no no"),
        Some(StammerRule::CharacterElongation)
    );
    assert_eq!(
        detector.analyze("hi", "stop stop stop it"),
        Some(StammerRule::TripleWordRepeat)
    );
    assert_eq!(
        detector.analyze("hi", "it is nice is nice"),
        Some(StammerRule::RepeatedBigram)
    );
    assert_eq!(
        detector.analyze("hi", "red car red sun red sky red"),
        Some(StammerRule::DisproportionateFrequency)
    );
    assert_eq!(detector.analyze("hi", "nothing wrong here"), None);
}

#[test]
fn test_stammerRule_display_shouldDescribeRule() {
    assert_eq!(
        StammerRule::CharacterElongation.to_string(),
        "character elongation"
    );
    assert_eq!(
        StammerRule::DisproportionateFrequency.to_string(),
        "disproportionate word frequency"
    );
}

#[test]
fn test_frequencyRule_countAtFloor_shouldNotFlag() {
    // "dog" appears exactly three times, which does not exceed the floor
    assert!(!detect_stammer("cat bird", "dog cat dog bird dog"));
}

#[test]
fn test_frequencyRule_sourceCountHighEnough_shouldNotFlag() {
    // Four occurrences against a source count of two misses the 3x ratio
    assert!(!detect_stammer(
        "dog dog cat bird tree",
        "dog cat dog bird dog tree dog"
    ));
}

#[test]
fn test_frequencyRule_sourceCountOne_shouldFlagAtTriple() {
    // Four occurrences against a source count of one meets 4 >= 3
    assert!(detect_stammer(
        "il cane dorme sul tappeto",
        "cane here cane there cane and cane"
    ));
}

#[test]
fn test_frequencyRule_shortTokens_shouldBeIgnored() {
    // "di" is two characters and never counted
    assert!(!detect_stammer("of the house", "di qua di là di su di giù"));
}

#[test]
fn test_repeatedBigram_threeTokens_shouldNotFire() {
    assert!(!detect_stammer("nice", "is nice is"));
}

#[test]
fn test_sourceAwareSuppression_tripleRepeat_shouldSuppress() {
    let detector = StammerDetector::with_config(StammerConfig {
        source_aware_suppression: true,
        ..Default::default()
    });

    // The source itself repeats a word three times, so the translated
    // repetition is plausibly legitimate.
    assert!(!detector.detect(
        "knock knock knock on the door",
        "toc toc toc alla porta"
    ));
}

#[test]
fn test_sourceAwareSuppression_isOffByDefault() {
    assert!(detect_stammer(
        "knock knock knock on the door",
        "toc toc toc alla porta"
    ));
}

#[test]
fn test_sourceAwareSuppression_frequencyRuleStillApplies() {
    let detector = StammerDetector::with_config(StammerConfig {
        source_aware_suppression: true,
        ..Default::default()
    });

    // Suppression covers the word and phrase rules, not the frequency rule
    assert!(detector.detect(
        "word word word and more",
        "mot here mot there mot everywhere mot always"
    ));
}

#[test]
fn test_customThresholds_shouldOverrideDefaults() {
    let lenient = StammerDetector::with_config(StammerConfig {
        frequency_floor: 10,
        ..Default::default()
    });
    assert!(!lenient.detect("cat dog bird", "dog here dog there dog everywhere dog"));
    assert!(detect_stammer("cat dog bird", "dog here dog there dog everywhere dog"));

    let strict = StammerDetector::with_config(StammerConfig {
        short_token_len: 1,
        ..Default::default()
    });
    assert!(strict.detect("Hi there", "hi hi hi there"));
}
