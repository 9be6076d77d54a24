/*
    params.rs - Raw filter parameter validation

    Query-string parameters arrive as untyped strings. Validation checks
    them one field at a time in a fixed order, so the same bad request
    always reports the same first error, then cross-checks the length
    bounds. Nothing is coerced silently: "yes" is not a boolean and "abc"
    is not a count.
*/

use crate::core_filter::errors::{FilterError, FilterResult};
use crate::core_filter::set::FilterSet;
use serde::Deserialize;

/// Untyped filter parameters exactly as they arrive on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawFilterParams {
    pub is_palindrome: Option<String>,
    pub min_length: Option<String>,
    pub max_length: Option<String>,
    pub word_count: Option<String>,
    pub contains_character: Option<String>,
}

impl RawFilterParams {
    /// Validate every provided field and build the typed filter set.
    ///
    /// Fields are checked in declaration order and the first failure wins;
    /// the min/max cross-check runs only after both bounds parsed.
    pub fn validate(&self) -> FilterResult<FilterSet> {
        let mut filters = FilterSet::default();

        if let Some(raw) = &self.is_palindrome {
            filters.is_palindrome = Some(parse_bool("is_palindrome", raw)?);
        }
        if let Some(raw) = &self.min_length {
            filters.min_length = Some(parse_count("min_length", raw)?);
        }
        if let Some(raw) = &self.max_length {
            filters.max_length = Some(parse_count("max_length", raw)?);
        }
        if let Some(raw) = &self.word_count {
            filters.word_count = Some(parse_positive_count("word_count", raw)?);
        }
        if let Some(raw) = &self.contains_character {
            filters.contains_character = Some(parse_character("contains_character", raw)?);
        }

        if let (Some(min), Some(max)) = (filters.min_length, filters.max_length) {
            if min > max {
                return Err(FilterError::EmptyRange { min, max });
            }
        }

        Ok(filters)
    }
}

fn parse_bool(field: &'static str, raw: &str) -> FilterResult<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(FilterError::InvalidParameter {
            field,
            reason: format!("expected \"true\" or \"false\", got \"{other}\""),
        }),
    }
}

fn parse_count(field: &'static str, raw: &str) -> FilterResult<usize> {
    raw.parse::<usize>()
        .map_err(|_| FilterError::InvalidParameter {
            field,
            reason: format!("expected a non-negative integer, got \"{raw}\""),
        })
}

// A word count of zero only matches all-whitespace values; the filter
// surface treats it as malformed rather than supporting it.
fn parse_positive_count(field: &'static str, raw: &str) -> FilterResult<usize> {
    match parse_count(field, raw)? {
        0 => Err(FilterError::InvalidParameter {
            field,
            reason: "expected a positive integer, got \"0\"".to_string(),
        }),
        count => Ok(count),
    }
}

fn parse_character(field: &'static str, raw: &str) -> FilterResult<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch.to_lowercase().next().unwrap_or(ch)),
        _ => Err(FilterError::InvalidParameter {
            field,
            reason: format!("expected exactly one character, got \"{raw}\""),
        }),
    }
}
