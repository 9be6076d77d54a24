/*
    core_analysis - Structural analysis of submitted strings

    Derives the property bundle every stored record carries:
    - Length, palindrome flag, unique characters, word count
    - SHA-256 content hash (doubles as the record identity)
    - Per-character frequency over the lowercased value

    Pure and deterministic. No I/O.
*/

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Derived structural properties of a submitted string.
///
/// Immutable once computed; field names are the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Character count of the original string (Unicode scalar values)
    pub length: usize,

    /// Whether the lowercased value equals its own reversal.
    /// Case is ignored; embedded whitespace and punctuation are not.
    pub is_palindrome: bool,

    /// Distinct characters in the lowercased value
    pub unique_characters: usize,

    /// Whitespace-delimited non-empty tokens
    pub word_count: usize,

    /// Lowercase-hex SHA-256 of the original (non-lowercased) bytes
    pub content_hash: String,

    /// Occurrence count per lowercased character
    pub character_frequency: HashMap<char, usize>,
}

/// Compute the lowercase-hex SHA-256 digest of a string's exact bytes.
///
/// The write path and every hash-based lookup go through this function so
/// that a re-hashed raw value matches its stored id byte for byte.
pub fn content_hash(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Analyze a string into its property bundle.
pub fn analyze(value: &str) -> StringProperties {
    let lowered = value.to_lowercase();

    let mut character_frequency: HashMap<char, usize> = HashMap::new();
    for ch in lowered.chars() {
        *character_frequency.entry(ch).or_insert(0) += 1;
    }

    StringProperties {
        length: value.chars().count(),
        is_palindrome: lowered.chars().eq(lowered.chars().rev()),
        unique_characters: character_frequency.len(),
        word_count: value.split_whitespace().count(),
        content_hash: content_hash(value),
        character_frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SHA-256 of the empty string, the canonical test vector.
    const EMPTY_SHA256: &str =
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    #[test]
    fn test_palindrome_ignores_case() {
        assert!(analyze("Racecar").is_palindrome);
        assert!(analyze("racecar").is_palindrome);
        assert!(analyze("RACECAR").is_palindrome);
    }

    #[test]
    fn test_palindrome_keeps_whitespace_and_punctuation() {
        // The embedded space participates in the reversal comparison
        assert!(!analyze("race car").is_palindrome);
        assert!(!analyze("A man, a plan").is_palindrome);
        // A symmetric layout still qualifies
        assert!(analyze("a b a").is_palindrome);
    }

    #[test]
    fn test_empty_string_properties() {
        let props = analyze("");
        assert_eq!(props.length, 0);
        assert_eq!(props.word_count, 0);
        assert_eq!(props.unique_characters, 0);
        assert!(props.is_palindrome);
        assert_eq!(props.content_hash, EMPTY_SHA256);
        assert!(props.character_frequency.is_empty());
    }

    #[test]
    fn test_whitespace_only_has_zero_words() {
        let props = analyze("   \t  ");
        assert_eq!(props.word_count, 0);
        assert_eq!(props.length, 6);
    }

    #[test]
    fn test_word_count_collapses_runs() {
        assert_eq!(analyze("hello world").word_count, 2);
        assert_eq!(analyze("  hello   world  ").word_count, 2);
        assert_eq!(analyze("one two three four").word_count, 4);
    }

    #[test]
    fn test_unique_characters_fold_case() {
        // 'A' and 'a' count once
        let props = analyze("Aa");
        assert_eq!(props.unique_characters, 1);
        assert_eq!(props.character_frequency.get(&'a'), Some(&2));
    }

    #[test]
    fn test_character_frequency() {
        let props = analyze("Hello");
        assert_eq!(props.character_frequency.get(&'h'), Some(&1));
        assert_eq!(props.character_frequency.get(&'e'), Some(&1));
        assert_eq!(props.character_frequency.get(&'l'), Some(&2));
        assert_eq!(props.character_frequency.get(&'o'), Some(&1));
        assert_eq!(props.character_frequency.len(), 4);
    }

    #[test]
    fn test_hash_is_case_sensitive() {
        assert_ne!(analyze("Hello").content_hash, analyze("hello").content_hash);
    }

    #[test]
    fn test_hash_format() {
        let hash = content_hash("stringvault");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_length_counts_scalar_values() {
        // Multibyte characters count once each
        let props = analyze("héllo");
        assert_eq!(props.length, 5);
        assert_eq!(analyze("日本語").length, 3);
    }
}
