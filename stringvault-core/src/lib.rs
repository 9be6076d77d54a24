pub mod config;
pub mod core_analysis;
pub mod core_filter;
pub mod core_nlq;
pub mod core_registry;
pub mod core_store;
pub mod logging;

pub use config::Config;
pub use core_analysis::{analyze, content_hash, StringProperties};
pub use core_filter::{FilterError, FilterSet, RawFilterParams};
pub use core_registry::{NlQueryOutcome, RegistryError, RegistryResult, StringRegistry};
pub use core_store::{JsonFileBackend, MemoryBackend, SnapshotBackend, StoredRecord};
pub use logging::{init_logging, LogLevel};
