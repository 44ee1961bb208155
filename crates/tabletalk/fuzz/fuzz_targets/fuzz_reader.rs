//! Fuzz target for the delimited-file reader.
//!
//! This fuzzer tests that the reader:
//! 1. Never panics on malformed input
//! 2. Survives delimiter auto-detection on arbitrary bytes
//! 3. Handles quoting and ragged rows gracefully

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tabletalk::Reader;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    // Go through a temp file so delimiter detection runs too
    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let reader = Reader::new();
            let _ = reader.read_file(temp_file.path());
        }
    }
});
