use anyhow::Context;
use cloudguard_domain::fingerprint::fingerprint_for_finding;
use cloudguard_domain::rule::RuleOutput;
use cloudguard_types::{ReportedFinding, RuleReport, SCHEMA_SCAN_REPORT_V1, ScanReport, lookup_rule};

/// Convert one rule output into its report form, attaching fingerprints.
pub fn build_rule_report(output: RuleOutput) -> anyhow::Result<RuleReport> {
    let RuleOutput {
        rule_id,
        error,
        findings,
        sources,
    } = output;

    let title = lookup_rule(rule_id)
        .map(|meta| meta.title.to_string())
        .unwrap_or_else(|| rule_id.to_string());

    let findings = findings
        .into_iter()
        .map(|finding| ReportedFinding {
            fingerprint: fingerprint_for_finding(
                rule_id,
                finding.partition.as_str(),
                finding.resource.as_ref().map(|r| r.as_str()),
            ),
            finding,
        })
        .collect();

    let sources = serde_json::to_value(&sources)
        .with_context(|| format!("serialize consulted sources for {rule_id}"))?;

    Ok(RuleReport {
        rule_id: rule_id.to_string(),
        title,
        error: error.map(|e| e.to_string()),
        findings,
        sources,
    })
}

/// Serialize a report as pretty JSON with a trailing newline.
pub fn serialize_report(report: &ScanReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ScanReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_SCAN_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse cloudguard scan report")
}
