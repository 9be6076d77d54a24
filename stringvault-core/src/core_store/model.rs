/*
    model.rs - Stored record model

    A record is created once by a successful submission and removed only by
    explicit deletion; nothing updates it in place. Identity invariant:
    `id` always equals `properties.content_hash`.
*/

use crate::core_analysis::{analyze, StringProperties};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered string together with its derived properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Record identity; equal to `properties.content_hash`
    pub id: String,
    /// The submitted string, preserved byte for byte
    pub value: String,
    /// Properties derived from `value` at creation time
    pub properties: StringProperties,
    /// Set once when the record is created
    pub created_at: DateTime<Utc>,
}

impl StoredRecord {
    /// Analyze a value and wrap it into a record stamped with the current time.
    pub fn from_value(value: impl Into<String>) -> Self {
        Self::from_value_at(value, Utc::now())
    }

    /// Analyze a value with an explicit creation timestamp.
    pub fn from_value_at(value: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let value = value.into();
        let properties = analyze(&value);
        StoredRecord {
            id: properties.content_hash.clone(),
            value,
            properties,
            created_at,
        }
    }
}
