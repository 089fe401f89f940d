//! Fuzz target for collector dump loading.
//!
//! Goal: loading a dump should **never panic** on any input.
//! Malformed dumps may fail the load or turn into failed entries, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_cache_dump
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Limit input size to keep fuzzing fast
    if data.len() > 64 * 1024 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = cloudguard_cache::load_json(text);
    }
});
