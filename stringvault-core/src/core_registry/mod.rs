/*
    core_registry - Registry facade

    Owns the store and composes the subsystems into the operations the
    service exposes: create, lookup, list, natural-language query, and
    delete. Handlers hold one registry instance and nothing else.

    Lookup contract: a target is first re-hashed as if it were the raw
    original string; only when that misses is it tried verbatim as an id
    copied from an earlier response. Re-hashing wins when both could
    apply.
*/

pub mod errors;

pub use errors::{RegistryError, RegistryResult};

use crate::core_analysis::content_hash;
use crate::core_filter::set::FilterSet;
use crate::core_nlq;
use crate::core_store::errors::StoreError;
use crate::core_store::model::StoredRecord;
use crate::core_store::snapshot::SnapshotBackend;
use crate::core_store::store::StringStore;
use serde::Serialize;
use tracing::debug;

/// Result of a natural-language query: what matched and how the query
/// was interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NlQueryOutcome {
    pub filters: FilterSet,
    pub matches: Vec<StoredRecord>,
}

/// The registry of analyzed strings.
pub struct StringRegistry {
    store: StringStore,
}

impl StringRegistry {
    /// Open the registry over a snapshot backend.
    pub fn open(backend: Box<dyn SnapshotBackend>) -> RegistryResult<Self> {
        Ok(StringRegistry {
            store: StringStore::open(backend)?,
        })
    }

    /// Analyze a value and store it. The same exact string can only be
    /// registered once; resubmission reports the existing id.
    pub fn create(&mut self, value: &str) -> RegistryResult<StoredRecord> {
        let record = StoredRecord::from_value(value);
        match self.store.insert(record.clone()) {
            Ok(()) => {
                debug!("Created record {}", record.id);
                Ok(record)
            }
            Err(StoreError::AlreadyExists(id)) => Err(RegistryError::AlreadyExists(id)),
            Err(err) => Err(err.into()),
        }
    }

    /// Find a record by raw string or by id.
    pub fn lookup(&self, target: &str) -> RegistryResult<&StoredRecord> {
        self.resolve_id(target)
            .and_then(|id| self.store.get(&id))
            .ok_or_else(|| RegistryError::NotFound(target.to_string()))
    }

    /// Remove a record by raw string or by id, returning what was removed.
    pub fn delete(&mut self, target: &str) -> RegistryResult<StoredRecord> {
        let id = self
            .resolve_id(target)
            .ok_or_else(|| RegistryError::NotFound(target.to_string()))?;
        let record = self
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(target.to_string()))?;

        self.store.remove(&id)?;
        debug!("Deleted record {id}");
        Ok(record)
    }

    /// All records passing the filters, in insertion order.
    pub fn list(&self, filters: &FilterSet) -> Vec<StoredRecord> {
        filters.apply(self.store.all())
    }

    /// Interpret a natural-language query and run the derived filters.
    pub fn nl_query(&self, raw: &str) -> RegistryResult<NlQueryOutcome> {
        let parsed = core_nlq::parse(raw);
        if parsed.is_unparsed() {
            return Err(RegistryError::UnparsableQuery(raw.to_string()));
        }
        if parsed.conflicts {
            return Err(RegistryError::ConflictingQuery(raw.to_string()));
        }

        let matches = self.list(&parsed.filters);
        Ok(NlQueryOutcome {
            filters: parsed.filters,
            matches,
        })
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Re-hash first; fall back to the target as a verbatim id.
    fn resolve_id(&self, target: &str) -> Option<String> {
        let hashed = content_hash(target);
        if self.store.contains(&hashed) {
            Some(hashed)
        } else if self.store.contains(target) {
            Some(target.to_string())
        } else {
            None
        }
    }
}
