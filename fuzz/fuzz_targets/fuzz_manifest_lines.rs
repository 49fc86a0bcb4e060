//! Fuzz target for project file line extraction.
//!
//! Goal: the framework/package extractors and the single-pass file scan should **never panic**
//! on any input, including invalid UTF-8 and markers cut off mid-line.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_manifest_lines
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ManifestInput {
    /// A single line run through both extractors.
    line: String,
    /// Raw bytes scanned as a whole project file.
    file: Vec<u8>,
}

fuzz_target!(|input: ManifestInput| {
    if input.line.len() > 4096 || input.file.len() > 64 * 1024 {
        return;
    }

    let _ = dependagen_scan::fuzz::scan_line(&input.line);
    let _ = dependagen_scan::fuzz::scan_bytes(&input.file);
});
