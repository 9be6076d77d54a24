//! Example demonstrating the registry end to end
//!
//! Run with:
//! ```bash
//! cargo run --example registry_demo
//! ```

use stringvault_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use stringvault_core::{FilterSet, MemoryBackend, StringRegistry};
use tracing::info;

fn main() {
    let config = LogConfig::new(LogLevel::Debug).with_timestamp(true).with_target(true);
    init_logging_with_config(config).expect("Failed to initialize logging");

    // Ephemeral registry; swap in JsonFileBackend for a durable one
    let mut registry =
        StringRegistry::open(Box::new(MemoryBackend::new())).expect("Failed to open registry");

    for value in ["racecar", "hello world", "Level", "stringvault"] {
        let record = registry.create(value).expect("Failed to create record");
        info!(id = %record.id, value = %record.value, "Stored");
    }

    // Structured filtering
    let palindromes = registry.list(&FilterSet {
        is_palindrome: Some(true),
        ..Default::default()
    });
    info!("{} palindrome(s) stored", palindromes.len());

    // Natural-language filtering
    let outcome = registry
        .nl_query("strings containing the letter v")
        .expect("Query should parse");
    for record in &outcome.matches {
        info!(value = %record.value, "Matched");
    }

    info!("Demo finished");
}
