/*
    parser.rs - Natural-language query parsing

    Normalizes a free-text query and tries each phrase template in
    priority order. A template matches only when it accounts for every
    token starting from the first; leading or trailing extra words make
    the whole query unparsed, never a partial match. Assignments go
    through a draft that records value collisions and the cross-field
    one-word/minimum-length contradiction as conflicts.
*/

use crate::core_filter::set::FilterSet;
use crate::core_nlq::grammar::{Assign, Template, Tok, TEMPLATES};
use tracing::debug;

/// Outcome of parsing one query: the derived filters plus whether the
/// assignments contradicted each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub filters: FilterSet,
    pub conflicts: bool,
}

impl ParsedQuery {
    fn unparsed() -> Self {
        ParsedQuery {
            filters: FilterSet::default(),
            conflicts: false,
        }
    }

    /// True when no template matched; every template assigns at least
    /// one filter, so an empty set can only mean an unrecognized query.
    pub fn is_unparsed(&self) -> bool {
        self.filters.is_empty()
    }
}

/// Parse a free-text query against the closed phrase grammar.
pub fn parse(raw: &str) -> ParsedQuery {
    let lowered = raw.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.is_empty() {
        return ParsedQuery::unparsed();
    }

    for template in TEMPLATES {
        if let Some(captures) = match_tokens(template, &tokens) {
            let mut draft = FilterDraft::default();
            for assign in template.assigns {
                draft.apply(*assign, &captures);
            }
            let parsed = draft.finish();
            debug!(
                "Query {:?} derived filters {:?} (conflicts: {})",
                raw, parsed.filters, parsed.conflicts
            );
            return parsed;
        }
    }

    debug!("Query {:?} matched no template", raw);
    ParsedQuery::unparsed()
}

/// Values captured by `Tok::Number` and `Tok::Letter` positions.
#[derive(Debug, Default)]
struct Captures {
    number: Option<usize>,
    letter: Option<char>,
}

/// Match a template against the full token stream. A length mismatch is
/// an immediate rejection: leftover tokens never count as a match.
fn match_tokens(template: &Template, tokens: &[&str]) -> Option<Captures> {
    if tokens.len() != template.pattern.len() {
        return None;
    }

    let mut captures = Captures::default();
    for (tok, &word) in template.pattern.iter().zip(tokens) {
        match tok {
            Tok::Lit(lit) => {
                if word != *lit {
                    return None;
                }
            }
            Tok::OneOf(alternatives) => {
                if !alternatives.contains(&word) {
                    return None;
                }
            }
            Tok::Number => {
                captures.number = Some(word.parse::<usize>().ok()?);
            }
            Tok::Letter => {
                captures.letter = Some(single_letter(word)?);
            }
        }
    }
    Some(captures)
}

fn single_letter(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_alphabetic() => Some(ch),
        _ => None,
    }
}

/// Accumulates filter assignments without losing contradictions: a
/// re-set with a different value keeps the newer value and raises the
/// conflict flag instead of crashing or dropping it.
#[derive(Debug, Default)]
struct FilterDraft {
    filters: FilterSet,
    conflicts: bool,
}

impl FilterDraft {
    fn apply(&mut self, assign: Assign, captures: &Captures) {
        match assign {
            Assign::Palindrome(value) => {
                assign_slot(&mut self.filters.is_palindrome, value, &mut self.conflicts)
            }
            Assign::WordCount(value) => {
                assign_slot(&mut self.filters.word_count, value, &mut self.conflicts)
            }
            Assign::MinLengthBeyondNumber => {
                if let Some(bound) = captures.number {
                    assign_slot(
                        &mut self.filters.min_length,
                        bound.saturating_add(1),
                        &mut self.conflicts,
                    );
                }
            }
            Assign::ContainsChar(ch) => assign_slot(
                &mut self.filters.contains_character,
                ch,
                &mut self.conflicts,
            ),
            Assign::ContainsCapturedLetter => {
                if let Some(ch) = captures.letter {
                    assign_slot(
                        &mut self.filters.contains_character,
                        ch,
                        &mut self.conflicts,
                    )
                }
            }
        }
    }

    /// Close the draft, applying the cross-field rule: a one-word
    /// reading cannot also require a minimum length above one.
    fn finish(mut self) -> ParsedQuery {
        if let (Some(1), Some(min)) = (self.filters.word_count, self.filters.min_length) {
            if min > 1 {
                self.conflicts = true;
            }
        }
        ParsedQuery {
            filters: self.filters,
            conflicts: self.conflicts,
        }
    }
}

fn assign_slot<T: Copy + PartialEq>(slot: &mut Option<T>, value: T, conflicts: &mut bool) {
    if let Some(existing) = *slot {
        if existing != value {
            *conflicts = true;
        }
    }
    *slot = Some(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(raw: &str) -> FilterSet {
        let parsed = parse(raw);
        assert!(!parsed.conflicts, "unexpected conflict for {raw:?}");
        parsed.filters
    }

    #[test]
    fn test_single_word_palindrome_phrase() {
        let expected = FilterSet {
            word_count: Some(1),
            is_palindrome: Some(true),
            ..Default::default()
        };
        assert_eq!(filters("all single word palindromic strings"), expected);
        assert_eq!(filters("all single word palindrome strings"), expected);
    }

    #[test]
    fn test_longer_than_phrase_is_exclusive() {
        assert_eq!(
            filters("strings longer than 10 characters"),
            FilterSet {
                min_length: Some(11),
                ..Default::default()
            }
        );
        assert_eq!(
            filters("strings longer than 0 characters"),
            FilterSet {
                min_length: Some(1),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_first_vowel_phrase() {
        assert_eq!(
            filters("palindromic strings that contain the first vowel"),
            FilterSet {
                is_palindrome: Some(true),
                contains_character: Some('a'),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_containing_letter_phrases() {
        let expected = FilterSet {
            contains_character: Some('q'),
            ..Default::default()
        };
        assert_eq!(filters("strings containing the letter q"), expected);
        assert_eq!(filters("strings containing q"), expected);
    }

    #[test]
    fn test_normalization_of_case_and_whitespace() {
        assert_eq!(
            filters("  STRINGS   Containing   Q  "),
            FilterSet {
                contains_character: Some('q'),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_trailing_tokens_reject_the_whole_query() {
        assert!(parse("strings containing q today").is_unparsed());
        assert!(parse("strings longer than 10 characters please").is_unparsed());
    }

    #[test]
    fn test_leading_tokens_are_never_skipped() {
        assert!(parse("show me strings containing q").is_unparsed());
    }

    #[test]
    fn test_empty_and_blank_queries_are_unparsed() {
        for raw in ["", "   ", "\t\n"] {
            let parsed = parse(raw);
            assert!(parsed.is_unparsed());
            assert!(!parsed.conflicts);
        }
    }

    #[test]
    fn test_number_slot_rejects_non_integers() {
        assert!(parse("strings longer than ten characters").is_unparsed());
        assert!(parse("strings longer than 3.5 characters").is_unparsed());
        assert!(parse("strings longer than -2 characters").is_unparsed());
    }

    #[test]
    fn test_number_slot_rejects_overflowing_integers() {
        assert!(parse("strings longer than 99999999999999999999999999 characters").is_unparsed());
    }

    #[test]
    fn test_letter_slot_rejects_words_and_digits() {
        assert!(parse("strings containing qu").is_unparsed());
        assert!(parse("strings containing 7").is_unparsed());
        assert!(parse("strings containing the letter 5").is_unparsed());
    }

    #[test]
    fn test_unknown_phrases_are_unparsed() {
        assert!(parse("give me everything").is_unparsed());
        assert!(parse("palindromes").is_unparsed());
    }

    #[test]
    fn test_draft_records_conflicting_reassignment() {
        let captures = Captures::default();
        let mut draft = FilterDraft::default();
        draft.apply(Assign::ContainsChar('a'), &captures);
        draft.apply(Assign::ContainsChar('b'), &captures);

        let parsed = draft.finish();
        assert!(parsed.conflicts);
        // The later value is recorded, not dropped
        assert_eq!(parsed.filters.contains_character, Some('b'));
    }

    #[test]
    fn test_draft_same_value_reassignment_is_not_a_conflict() {
        let captures = Captures::default();
        let mut draft = FilterDraft::default();
        draft.apply(Assign::Palindrome(true), &captures);
        draft.apply(Assign::Palindrome(true), &captures);

        assert!(!draft.finish().conflicts);
    }

    #[test]
    fn test_draft_flags_one_word_minimum_length_contradiction() {
        let captures = Captures {
            number: Some(4),
            letter: None,
        };
        let mut draft = FilterDraft::default();
        draft.apply(Assign::WordCount(1), &captures);
        draft.apply(Assign::MinLengthBeyondNumber, &captures);

        let parsed = draft.finish();
        assert!(parsed.conflicts);
        assert_eq!(parsed.filters.min_length, Some(5));
        assert_eq!(parsed.filters.word_count, Some(1));
    }

    #[test]
    fn test_one_word_with_minimum_length_one_is_consistent() {
        // "longer than 0" means a minimum of one character, which any
        // one-word string satisfies
        let captures = Captures {
            number: Some(0),
            letter: None,
        };
        let mut draft = FilterDraft::default();
        draft.apply(Assign::WordCount(1), &captures);
        draft.apply(Assign::MinLengthBeyondNumber, &captures);

        assert!(!draft.finish().conflicts);
    }
}
