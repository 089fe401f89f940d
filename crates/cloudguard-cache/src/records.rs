//! Typed record schemas, one per resource kind.
//!
//! Collector payloads are decoded here, at the population boundary. Nested
//! settings that may be missing at any level are read through [`Flag`]
//! accessors so rules handle "absent" explicitly.

use cloudguard_types::ids;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Tri-state view of an optional boolean setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Enabled,
    Disabled,
    Absent,
}

impl Flag {
    pub fn from_option(value: Option<bool>) -> Self {
        match value {
            Some(true) => Flag::Enabled,
            Some(false) => Flag::Disabled,
            None => Flag::Absent,
        }
    }
}

/// A validated resource record.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Project(Project),
    Cluster(Cluster),
}

impl Record {
    /// Decode one raw record for the given cache kind.
    ///
    /// Returns `Ok(None)` for kinds without a schema.
    pub fn decode(kind: &str, raw: JsonValue) -> Result<Option<Record>, serde_json::Error> {
        let record = match kind {
            ids::KIND_PROJECTS => Record::Project(serde_json::from_value(raw)?),
            ids::KIND_KUBERNETES_CLUSTERS => Record::Cluster(serde_json::from_value(raw)?),
            _ => return Ok(None),
        };
        Ok(Some(record))
    }

    pub fn is_known_kind(kind: &str) -> bool {
        matches!(kind, ids::KIND_PROJECTS | ids::KIND_KUBERNETES_CLUSTERS)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Record::Project(_) => ids::KIND_PROJECTS,
            Record::Cluster(_) => ids::KIND_KUBERNETES_CLUSTERS,
        }
    }
}

/// Borrow a specific record type out of a [`Record`].
pub trait FromRecord {
    /// Cache kind this schema belongs to.
    const KIND: &'static str;

    fn from_record(record: &Record) -> Option<&Self>;
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_number: Option<String>,
}

impl FromRecord for Project {
    const KIND: &'static str = ids::KIND_PROJECTS;

    fn from_record(record: &Record) -> Option<&Self> {
        match record {
            Record::Project(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Zones the cluster's nodes run in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_allocation_policy: Option<IpAllocationPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<NetworkPolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_abac: Option<LegacyAbac>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAllocationPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_ip_aliases: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyAbac {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl Cluster {
    pub fn ip_aliases(&self) -> Flag {
        Flag::from_option(self.ip_allocation_policy.as_ref().and_then(|p| p.use_ip_aliases))
    }

    pub fn network_policy(&self) -> Flag {
        Flag::from_option(self.network_policy.as_ref().and_then(|p| p.enabled))
    }

    pub fn legacy_abac(&self) -> Flag {
        Flag::from_option(self.legacy_abac.as_ref().and_then(|p| p.enabled))
    }
}

impl FromRecord for Cluster {
    const KIND: &'static str = ids::KIND_KUBERNETES_CLUSTERS;

    fn from_record(record: &Record) -> Option<&Self> {
        match record {
            Record::Cluster(c) => Some(c),
            _ => None,
        }
    }
}
