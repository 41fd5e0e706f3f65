//! Fixed keyword tables that drive the extractor.
//!
//! Matching is case-insensitive substring containment, not word-boundary
//! matching: "tired" inside "retired" counts. The classifier's behavior is
//! defined in terms of that containment, so tightening it would change
//! every downstream score.

use mirrorme_core::Emotion;

/// Phrases indicating acute self-harm risk. Any hit sets the crisis flag
/// and forces the risk level to high.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "self-harm",
    "hurt myself",
    "not worth living",
];

/// Negative-sentiment vocabulary. Each entry counts at most once per text.
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "anxious",
    "depressed",
    "lonely",
    "stressed",
    "overwhelmed",
    "tired",
    "hopeless",
    "worried",
    "afraid",
];

/// Positive-sentiment vocabulary. Each entry counts at most once per text.
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "grateful",
    "peaceful",
    "hopeful",
    "better",
    "calm",
    "good",
    "joyful",
];

/// Emotion tagging rules in priority order. A rule fires when any of its
/// trigger substrings is present, and every firing rule appends its tag.
pub const EMOTION_RULES: &[(Emotion, &[&str])] = &[
    (Emotion::Anxiety, &["anxious", "anxiety", "worried", "panic"]),
    (Emotion::Stress, &["stress", "overwhelm", "pressure"]),
    (Emotion::Grief, &["grief", "loss", "miss", "mourn"]),
    (Emotion::Loneliness, &["lonely", "alone", "isolated", "disconnected"]),
    (Emotion::Burnout, &["burnout", "exhaust", "drained", "tired"]),
];

/// True when any needle occurs in `haystack`. Expects lowercased input.
pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// How many entries of `words` occur in `haystack`, each counted at most
/// once no matter how often it repeats. Expects lowercased input.
pub(crate) fn count_present(haystack: &str, words: &[&str]) -> usize {
    words.iter().filter(|word| haystack.contains(**word)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_present_counts_each_entry_once() {
        let text = "stressed and stressed and stressed";
        assert_eq!(count_present(text, NEGATIVE_WORDS), 1);
    }

    #[test]
    fn count_present_matches_substrings() {
        // "tired" is contained in "retired".
        assert_eq!(count_present("i retired last year", NEGATIVE_WORDS), 1);
    }

    #[test]
    fn contains_any_finds_multiword_phrases() {
        assert!(contains_any("i want to end my life", CRISIS_PHRASES));
        assert!(!contains_any("my life is busy", CRISIS_PHRASES));
    }

    #[test]
    fn lexicons_are_lowercase() {
        let all = CRISIS_PHRASES
            .iter()
            .chain(NEGATIVE_WORDS)
            .chain(POSITIVE_WORDS)
            .chain(EMOTION_RULES.iter().flat_map(|(_, triggers)| triggers.iter()));
        for entry in all {
            assert_eq!(*entry, entry.to_lowercase(), "lexicon entry {entry:?} must be lowercase");
        }
    }
}
