//! Use case orchestration for cloudguard.
//!
//! This crate provides the application layer: use cases that coordinate the cache, settings,
//! and domain layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! A CLI or service front end depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod explain;
mod report;
mod scan;

pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use report::{build_rule_report, parse_report_json, serialize_report};
pub use scan::{ScanInput, ScanOutput, run_scan, scan_cache, verdict_exit_code};
