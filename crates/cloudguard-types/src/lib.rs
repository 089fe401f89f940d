//! Stable DTOs and IDs used across the cloudguard workspace.
//!
//! This crate is intentionally boring:
//! - the severity taxonomy and the finding record
//! - partitions and deterministic resource identities
//! - stable string IDs for rules, resource kinds and API operations
//! - the rule catalog (titles, remediation, API dependencies)
//! - the scan report envelope

#![forbid(unsafe_code)]

pub mod catalog;
pub mod finding;
pub mod ids;
pub mod partition;
pub mod report;
pub mod resource;

pub use catalog::{ApiSource, RuleMeta, all_rule_ids, lookup_rule};
pub use finding::{Finding, Severity, SeverityCounts, UnknownSeverity, Verdict};
pub use partition::Partition;
pub use report::{
    ReportedFinding, RuleReport, SCHEMA_SCAN_REPORT_V1, ScanReport, ToolMeta,
};
pub use resource::{Locality, ResourceId};
