#![no_main]

use libfuzzer_sys::fuzz_target;
use stringvault_core::core_analysis::analyze;

fuzz_target!(|data: &str| {
    let properties = analyze(data);

    // Frequencies over the lowercased value always sum to its length
    let total: usize = properties.character_frequency.values().sum();
    assert_eq!(total, data.to_lowercase().chars().count());

    // The digest is fixed-width hex for every input
    assert_eq!(properties.content_hash.len(), 64);
    assert!(properties
        .content_hash
        .chars()
        .all(|c| c.is_ascii_hexdigit()));
});
