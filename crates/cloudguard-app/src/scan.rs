//! The `scan` use case: load a cache dump, evaluate enabled rules, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use cloudguard_cache::DataSource;
use cloudguard_settings::{CloudguardConfigV1, Overrides, ResolvedConfig};
use cloudguard_types::{SCHEMA_SCAN_REPORT_V1, ScanReport, ToolMeta, Verdict};
use time::OffsetDateTime;
use tracing::info;

use crate::report::build_rule_report;

/// Input for the scan use case.
#[derive(Clone, Debug)]
pub struct ScanInput<'a> {
    /// Collector dump to evaluate.
    pub cache_path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the scan use case.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub report: ScanReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the scan use case: parse config, load the cache dump, evaluate, produce report.
pub async fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let cache = cloudguard_cache::load_file(input.cache_path)
        .with_context(|| format!("load cache dump {}", input.cache_path))?;
    info!(entries = cache.len(), path = %input.cache_path, "cache loaded");

    scan_cache(&cache, input.config_text, input.overrides).await
}

/// Evaluate an already populated cache.
pub async fn scan_cache(
    cache: &dyn DataSource,
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if config_text.trim().is_empty() {
        CloudguardConfigV1::default()
    } else {
        cloudguard_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved =
        cloudguard_settings::resolve_config(cfg, overrides).context("resolve config")?;

    let domain_report = cloudguard_domain::evaluate(cache, &resolved.effective).await;
    let cloudguard_domain::report::DomainReport {
        verdict,
        rules,
        counts,
    } = domain_report;

    let rules = rules
        .into_iter()
        .map(build_rule_report)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let finished_at = OffsetDateTime::now_utc();

    Ok(ScanOutput {
        report: ScanReport {
            schema: SCHEMA_SCAN_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "cloudguard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            started_at,
            finished_at,
            verdict,
            counts,
            rules,
        },
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 1 = incomplete, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Incomplete => 1,
        Verdict::Fail => 2,
    }
}
