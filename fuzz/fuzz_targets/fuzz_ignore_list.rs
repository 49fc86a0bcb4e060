//! Fuzz target for ignore-list parsing.
//!
//! Goal: arbitrary payloads may be rejected, but parsing must **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_ignore_list
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = dependagen_ignore::IgnoreIndex::parse_json(text);
    }
});
