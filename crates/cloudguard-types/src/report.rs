use crate::{Finding, SeverityCounts, Verdict};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for scan reports.
pub const SCHEMA_SCAN_REPORT_V1: &str = "cloudguard.scan.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// A finding as it appears in a report, keyed by a stable fingerprint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportedFinding {
    /// SHA-256 over `rule_id|partition|resource`; stable for an unchanged resource.
    pub fingerprint: String,
    #[serde(flatten)]
    pub finding: Finding,
}

/// Output of one rule invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleReport {
    pub rule_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub findings: Vec<ReportedFinding>,
    /// Cache entries the rule consulted, nested as `kind -> operation -> partition`.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub sources: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub counts: SeverityCounts,
    pub rules: Vec<RuleReport>,
}
