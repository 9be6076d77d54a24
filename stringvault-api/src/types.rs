//! Request/Response types for the registry API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stringvault_core::{FilterSet, StoredRecord, StringProperties};

// ============================================================================
// String Record Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRecordResponse {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

impl From<StoredRecord> for StringRecordResponse {
    fn from(record: StoredRecord) -> Self {
        Self {
            id: record.id,
            value: record.value,
            properties: record.properties,
            created_at: record.created_at,
        }
    }
}

// ============================================================================
// Listing Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListStringsResponse {
    pub data: Vec<StringRecordResponse>,
    pub count: usize,
    /// The normalized filters that were actually applied
    pub filters_applied: FilterSet,
}

// ============================================================================
// Natural-Language Query Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct NlQueryParams {
    pub query: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlQueryResponse {
    pub data: Vec<StringRecordResponse>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretedQuery {
    /// The query exactly as the client sent it
    pub original: String,
    /// The structured filters derived from it
    pub parsed_filters: FilterSet,
}

// ============================================================================
// Health Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub stored_strings: usize,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
