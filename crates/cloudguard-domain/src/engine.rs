use crate::error::RuleError;
use crate::policy::ScanConfig;
use crate::report::{DomainReport, compute_verdict};
use crate::rule::{Rule, RuleInput, RuleOutput};
use crate::rules::builtin_rules;
use crate::sources::SourceLog;
use cloudguard_cache::DataSource;
use cloudguard_types::{Finding, Partition, Severity, SeverityCounts};
use futures::FutureExt;
use futures::future::join_all;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{info, warn};

/// Run one rule, converting a panic that escapes it into an errored output.
pub async fn run_rule(rule: &dyn Rule, cache: &dyn DataSource, input: RuleInput<'_>) -> RuleOutput {
    match AssertUnwindSafe(rule.run(cache, input)).catch_unwind().await {
        Ok(output) => output,
        Err(payload) => {
            let err = RuleError::from_panic(payload.as_ref());
            warn!(rule = rule.id(), error = %err, "rule panicked");
            RuleOutput {
                rule_id: rule.id(),
                findings: vec![Finding::new(
                    Severity::Unknown,
                    format!("Unable to run rule: {err}"),
                    Partition::global(),
                )],
                error: Some(err),
                sources: SourceLog::default(),
            }
        }
    }
}

/// Evaluate the built-in rules enabled by `cfg`.
pub async fn evaluate(cache: &dyn DataSource, cfg: &ScanConfig) -> DomainReport {
    evaluate_with(&builtin_rules(), cache, cfg).await
}

/// Evaluate every rule in `rules` that `cfg` enables, concurrently, against
/// one shared cache.
pub async fn evaluate_with(
    rules: &[Arc<dyn Rule>],
    cache: &dyn DataSource,
    cfg: &ScanConfig,
) -> DomainReport {
    let runs = rules.iter().filter_map(|rule| {
        let policy = cfg.rule_policy(rule.id())?;
        let input = RuleInput {
            settings: &policy.settings,
            partitions: &cfg.partitions,
        };
        Some(run_rule(rule.as_ref(), cache, input))
    });
    let mut outputs = join_all(runs).await;

    // Deterministic ordering regardless of completion order.
    outputs.sort_by(|a, b| a.rule_id.cmp(b.rule_id));

    let counts = SeverityCounts::from_findings(outputs.iter().flat_map(|o| &o.findings));
    let verdict = compute_verdict(&counts, cfg.fail_on);

    info!(
        rules = outputs.len(),
        ok = counts.ok,
        warning = counts.warning,
        failing = counts.failing,
        unknown = counts.unknown,
        ?verdict,
        "scan evaluated"
    );

    DomainReport {
        verdict,
        rules: outputs,
        counts,
    }
}
