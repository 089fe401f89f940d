//! Config parsing and rule/partition resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod defaults;
mod model;
mod resolve;

pub use defaults::{KUBERNETES_REGIONS, default_config, default_partitions};
pub use model::{CloudguardConfigV1, RuleConfig};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `cloudguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CloudguardConfigV1> {
    let cfg: CloudguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (defaults + overrides + per-rule config).
pub fn resolve_config(
    cfg: CloudguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
