/*
    set.rs - Typed filter criteria

    A FilterSet is the normalized form every query surface produces:
    absent criteria are None, present ones must all hold for a record to
    pass. Serialization skips absent fields so responses echo exactly the
    criteria that were applied.
*/

use crate::core_store::model::StoredRecord;
use serde::{Deserialize, Serialize};

/// Criteria applied to stored records, combined with AND semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Inclusive lower bound on character length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Inclusive upper bound on character length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Matched case-insensitively against the stored value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSet {
    /// True when no criterion is set; an empty set matches everything.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Whether a record satisfies every set criterion.
    pub fn matches(&self, record: &StoredRecord) -> bool {
        let properties = &record.properties;

        if let Some(expected) = self.is_palindrome {
            if properties.is_palindrome != expected {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if properties.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if properties.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if properties.word_count != count {
                return false;
            }
        }
        if let Some(ch) = self.contains_character {
            // Presence test against the raw value, case-insensitive
            let needle = ch.to_lowercase().next().unwrap_or(ch);
            if !record.value.to_lowercase().contains(needle) {
                return false;
            }
        }

        true
    }

    /// Keep the records that match, preserving their order.
    pub fn apply(&self, records: Vec<StoredRecord>) -> Vec<StoredRecord> {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}
