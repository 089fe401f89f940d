use crate::{Partition, ResourceId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Severity taxonomy. The numeric codes are part of the output contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Ok = 0,
    Warning = 1,
    Failing = 2,
    Unknown = 3,
}

impl Severity {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warning => "warning",
            Severity::Failing => "failing",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Severity> for u8 {
    fn from(value: Severity) -> Self {
        value.code()
    }
}

/// Returned when a numeric severity code is outside `0..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownSeverity(pub u8);

impl fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity code {} (expected 0..=3)", self.0)
    }
}

impl std::error::Error for UnknownSeverity {}

impl TryFrom<u8> for Severity {
    type Error = UnknownSeverity;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Severity::Ok),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Failing),
            3 => Ok(Severity::Unknown),
            other => Err(UnknownSeverity(other)),
        }
    }
}

/// One evaluation outcome emitted by a rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    #[schemars(with = "u8")]
    pub severity: Severity,
    pub message: String,
    pub partition: Partition,

    /// Absent for partition-level findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceId>,

    /// Supplementary payload for downstream tooling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<JsonValue>,

    /// Raw error context, usually the collector's fetch error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonValue>,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>, partition: Partition) -> Self {
        Self {
            severity,
            message: message.into(),
            partition,
            resource: None,
            extra: None,
            error: None,
        }
    }

    pub fn with_resource(mut self, resource: ResourceId) -> Self {
        self.resource = Some(resource);
        self
    }

    pub fn with_extra(mut self, extra: JsonValue) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn with_error(mut self, error: Option<JsonValue>) -> Self {
        self.error = error;
        self
    }
}

/// Overall outcome of a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
    /// Nothing failed, but at least one result could not be determined.
    Incomplete,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub ok: u32,
    pub warning: u32,
    pub failing: u32,
    pub unknown: u32,
}

impl SeverityCounts {
    pub fn from_findings<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            counts.add(f.severity);
        }
        counts
    }

    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Ok => self.ok += 1,
            Severity::Warning => self.warning += 1,
            Severity::Failing => self.failing += 1,
            Severity::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.ok + self.warning + self.failing + self.unknown
    }
}
