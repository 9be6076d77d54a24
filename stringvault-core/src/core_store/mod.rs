/*
    core_store - Content-addressed persistence layer

    The authoritative state of the registry. Handles:
    - The stored record model (value + derived properties + timestamp)
    - Whole-snapshot durability through pluggable backends
    - The insertion-ordered, hash-indexed in-memory collection
*/

pub mod errors;
pub mod model;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use errors::{StoreError, StoreResult};
pub use model::StoredRecord;
pub use snapshot::{JsonFileBackend, MemoryBackend, SnapshotBackend};
pub use store::StringStore;
