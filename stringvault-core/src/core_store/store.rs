/*
    store.rs - Content-addressed record store

    In-memory collection keyed by content hash, kept in insertion order,
    with a SnapshotBackend behind it. Every mutation is flushed in full
    before it is acknowledged; a failed flush rolls the mutation back so
    memory never runs ahead of durable state.
*/

use crate::core_store::errors::{StoreError, StoreResult};
use crate::core_store::model::StoredRecord;
use crate::core_store::snapshot::SnapshotBackend;
use std::collections::HashMap;
use tracing::debug;

/// Content-addressed store over a snapshot backend.
pub struct StringStore {
    backend: Box<dyn SnapshotBackend>,
    /// Records in insertion order; the snapshot mirrors this list exactly
    records: Vec<StoredRecord>,
    /// id -> position in `records`
    index: HashMap<String, usize>,
}

impl StringStore {
    /// Load the snapshot through the backend and build the hash index.
    ///
    /// Duplicate ids in the snapshot keep their first position with the
    /// last value winning, so a hand-edited file cannot double-count.
    pub fn open(backend: Box<dyn SnapshotBackend>) -> StoreResult<Self> {
        let loaded = backend.load()?;

        let mut records: Vec<StoredRecord> = Vec::with_capacity(loaded.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(loaded.len());
        for record in loaded {
            match index.get(&record.id) {
                Some(&pos) => records[pos] = record,
                None => {
                    index.insert(record.id.clone(), records.len());
                    records.push(record);
                }
            }
        }

        debug!("Store opened with {} record(s)", records.len());
        Ok(StringStore {
            backend,
            records,
            index,
        })
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&StoredRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a new record and flush. An existing id is rejected; the
    /// store never replaces a record implicitly.
    pub fn insert(&mut self, record: StoredRecord) -> StoreResult<()> {
        if self.index.contains_key(&record.id) {
            return Err(StoreError::AlreadyExists(record.id));
        }

        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);

        if let Err(err) = self.flush() {
            // Undo the append so memory matches the last durable snapshot
            if let Some(record) = self.records.pop() {
                self.index.remove(&record.id);
            }
            return Err(err);
        }
        Ok(())
    }

    /// Remove a record and flush. Returns `Ok(false)` when the id is
    /// absent; removal keeps the order of the remaining records.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let pos = match self.index.remove(id) {
            Some(pos) => pos,
            None => return Ok(false),
        };

        let record = self.records.remove(pos);
        self.reindex_from(pos);

        if let Err(err) = self.flush() {
            // Put the record back where it was
            self.records.insert(pos, record);
            self.reindex_from(pos);
            return Err(err);
        }
        Ok(true)
    }

    /// Clone of the collection in insertion order. Not a live view.
    pub fn all(&self) -> Vec<StoredRecord> {
        self.records.clone()
    }

    /// Rewrite the full collection through the backend.
    pub fn flush(&self) -> StoreResult<()> {
        self.backend.persist(&self.records)
    }

    fn reindex_from(&mut self, pos: usize) {
        for (offset, record) in self.records[pos..].iter().enumerate() {
            self.index.insert(record.id.clone(), pos + offset);
        }
    }
}
