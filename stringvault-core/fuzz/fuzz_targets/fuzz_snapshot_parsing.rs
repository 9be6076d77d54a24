#![no_main]

use libfuzzer_sys::fuzz_target;
use stringvault_core::core_store::StoredRecord;

fuzz_target!(|data: &[u8]| {
    // Malformed snapshot bytes must be rejected cleanly, never panic
    if let Ok(json_str) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<Vec<StoredRecord>>(json_str);
    }
});
