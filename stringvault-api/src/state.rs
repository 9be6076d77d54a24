//! Server state shared across requests

use std::sync::Arc;
use std::time::Instant;
use stringvault_core::StringRegistry;
use tokio::sync::RwLock;

/// Server state shared across requests
#[derive(Clone)]
pub struct AppState {
    /// The registry; reads run concurrently, mutations take the write lock
    pub registry: Arc<RwLock<StringRegistry>>,

    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wrap a registry for shared use by the router
    pub fn new(registry: StringRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            started_at: Instant::now(),
        }
    }
}
