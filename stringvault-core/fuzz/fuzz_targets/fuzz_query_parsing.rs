#![no_main]

use libfuzzer_sys::fuzz_target;
use stringvault_core::core_nlq::parse;

fuzz_target!(|data: &str| {
    // The parser must never panic, whatever the query looks like
    let parsed = parse(data);

    // A conflict can only be reported for a query that matched, and a
    // matched query always carries at least one filter
    if parsed.conflicts {
        assert!(!parsed.filters.is_empty());
    }
});
