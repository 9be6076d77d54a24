/*
    snapshot.rs - Durable snapshot backends

    The record collection is persisted as one whole snapshot: written in
    full after every mutation, read in full at startup. Two backends:

    - JsonFileBackend: single human-readable JSON file, written to a temp
      sibling and renamed into place so a crash never leaves a torn file.
    - MemoryBackend: keeps the snapshot in memory, for tests and
      ephemeral runs.

    A missing, unreadable, or malformed snapshot loads as an empty
    collection rather than an error; the service must come up cold.
*/

use crate::core_store::errors::{StoreError, StoreResult};
use crate::core_store::model::StoredRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

/// Storage backend for the full record collection.
pub trait SnapshotBackend: Send + Sync {
    /// Read the full collection from durable state.
    fn load(&self) -> StoreResult<Vec<StoredRecord>>;

    /// Overwrite durable state with the full collection.
    fn persist(&self, records: &[StoredRecord]) -> StoreResult<()>;
}

/// Whole-file JSON snapshot at a fixed path.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileBackend { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for JsonFileBackend {
    fn load(&self) -> StoreResult<Vec<StoredRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Snapshot {} unreadable, starting empty: {}",
                        self.path.display(),
                        err
                    );
                }
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    "Snapshot {} malformed, starting empty: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, records: &[StoredRecord]) -> StoreResult<()> {
        let data = serde_json::to_string_pretty(records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to a temp sibling, sync, then rename over the snapshot
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
        drop(file);
        fs::rename(&temp_path, &self.path)?;

        debug!(
            "Persisted {} record(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory snapshot, dropped with the process.
#[derive(Default)]
pub struct MemoryBackend {
    records: RwLock<Vec<StoredRecord>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    pub fn seeded(records: Vec<StoredRecord>) -> Self {
        MemoryBackend {
            records: RwLock::new(records),
        }
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self) -> StoreResult<Vec<StoredRecord>> {
        Ok(self.records.read().map_err(handle_poison)?.clone())
    }

    fn persist(&self, records: &[StoredRecord]) -> StoreResult<()> {
        *self.records.write().map_err(handle_poison)? = records.to_vec();
        Ok(())
    }
}

fn handle_poison<T>(_err: PoisonError<T>) -> StoreError {
    StoreError::Storage("Lock poisoned: a writer panicked while holding it".to_string())
}
