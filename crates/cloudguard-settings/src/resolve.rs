use crate::{defaults, model::CloudguardConfigV1};
use anyhow::Context;
use cloudguard_domain::policy::{FailOn, RuleSettings, ScanConfig};
use cloudguard_types::{Partition, lookup_rule};
use globset::{Glob, GlobSet, GlobSetBuilder};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub fail_on: Option<String>,
    /// Replaces the config's `include` list when non-empty.
    pub include: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: ScanConfig,
}

pub fn resolve_config(
    cfg: CloudguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let mut effective = defaults::default_config();

    // partitions
    for (kind, names) in &cfg.partitions {
        let partitions = names
            .iter()
            .map(|name| {
                if name.trim().is_empty() {
                    anyhow::bail!("empty partition name for {kind}");
                }
                Ok(Partition::from(name.as_str()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        effective.partitions.insert(kind.clone(), partitions);
    }

    // per-rule overrides
    for (rule_id, rc) in &cfg.rules {
        if lookup_rule(rule_id).is_none() {
            anyhow::bail!("unknown rule id in [rules]: {rule_id}");
        }
        let Some(entry) = effective.rules.get_mut(rule_id) else {
            continue;
        };
        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(settings) = &rc.settings {
            entry.settings = RuleSettings::new(settings.clone());
        }
    }

    // rule selection
    let include = if overrides.include.is_empty() {
        &cfg.include
    } else {
        &overrides.include
    };
    if !include.is_empty() {
        let set = build_include_set(include)?;
        for (rule_id, policy) in effective.rules.iter_mut() {
            if !set.is_match(rule_id) {
                policy.enabled = false;
            }
        }
    }

    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn build_include_set(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob =
            Glob::new(pattern).with_context(|| format!("invalid include glob: {pattern}"))?;
        builder.add(glob);
    }
    builder.build().context("failed to build include set")
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "failing" | "fail" => Ok(FailOn::Failing),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected failing|warning)"),
    }
}
