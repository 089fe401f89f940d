//! Fuzz target for config parsing and resolution.
//!
//! Goal: parsing and resolving `cloudguard.toml` should **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use arbitrary::Arbitrary;
use cloudguard_settings::{Overrides, parse_config_toml, resolve_config};
use libfuzzer_sys::fuzz_target;

/// Structured input: raw config text plus CLI-style overrides.
#[derive(Arbitrary, Debug)]
struct ConfigInput {
    text: String,
    fail_on: Option<String>,
    include: Vec<String>,
}

fuzz_target!(|input: ConfigInput| {
    if input.text.len() > 16 * 1024 || input.include.len() > 20 {
        return;
    }

    let Ok(cfg) = parse_config_toml(&input.text) else {
        return;
    };
    let overrides = Overrides {
        fail_on: input.fail_on,
        include: input.include.into_iter().filter(|p| p.len() <= 256).collect(),
    };
    let _ = resolve_config(cfg, overrides);
});
