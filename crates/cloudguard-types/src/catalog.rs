//! Rule catalog.
//!
//! Maps rule IDs to human-readable metadata, remediation guidance, and the
//! API sources the collector must fetch before the rule can run.

use crate::ids;
use std::fmt;

/// One `(resource kind, operation)` pair a rule reads from the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiSource {
    pub kind: &'static str,
    pub operation: &'static str,
}

impl ApiSource {
    pub const fn new(kind: &'static str, operation: &'static str) -> Self {
        Self { kind, operation }
    }
}

impl fmt::Display for ApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.operation)
    }
}

/// Project lookup every rule performs before iterating partitions.
pub const PROJECTS_GET: ApiSource = ApiSource::new(ids::KIND_PROJECTS, ids::OP_GET);
pub const KUBERNETES_CLUSTERS_LIST: ApiSource =
    ApiSource::new(ids::KIND_KUBERNETES_CLUSTERS, ids::OP_LIST);

/// Catalog entry for a rule.
#[derive(Debug, Clone)]
pub struct RuleMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub domain: &'static str,
    /// What the rule verifies.
    pub description: &'static str,
    /// Why the setting matters.
    pub more_info: &'static str,
    pub link: &'static str,
    pub recommended_action: &'static str,
    /// Sources the collector must fetch, the project lookup included.
    pub apis: &'static [ApiSource],
}

pub static ALIAS_IP_RANGES_ENABLED: RuleMeta = RuleMeta {
    id: ids::RULE_KUBERNETES_ALIAS_IP_RANGES_ENABLED,
    title: "Alias IP Ranges Enabled",
    category: "Kubernetes",
    domain: "Containers",
    description: "Ensures all Kubernetes clusters have alias IP ranges enabled",
    more_info: "Alias IP ranges allow users to assign ranges of internal IP addresses as alias to a network interface.",
    link: "https://cloud.google.com/monitoring/kubernetes-engine/",
    recommended_action: "Ensure that Kubernetes clusters have alias IP ranges enabled.",
    apis: &[PROJECTS_GET, KUBERNETES_CLUSTERS_LIST],
};

pub static NETWORK_POLICY_ENABLED: RuleMeta = RuleMeta {
    id: ids::RULE_KUBERNETES_NETWORK_POLICY_ENABLED,
    title: "Network Policy Enabled",
    category: "Kubernetes",
    domain: "Containers",
    description: "Ensures all Kubernetes clusters have network policy enabled",
    more_info: "Network policies restrict which pods may communicate with each other, limiting lateral movement after a compromise.",
    link: "https://cloud.google.com/kubernetes-engine/docs/how-to/network-policy",
    recommended_action: "Enable network policy enforcement for all Kubernetes clusters.",
    apis: &[PROJECTS_GET, KUBERNETES_CLUSTERS_LIST],
};

pub static LEGACY_ABAC_DISABLED: RuleMeta = RuleMeta {
    id: ids::RULE_KUBERNETES_LEGACY_ABAC_DISABLED,
    title: "Legacy Authorization Disabled",
    category: "Kubernetes",
    domain: "Containers",
    description: "Ensures legacy attribute-based access control is disabled on all Kubernetes clusters",
    more_info: "Legacy ABAC grants broad, statically configured permissions. RBAC offers finer-grained, auditable access control.",
    link: "https://cloud.google.com/kubernetes-engine/docs/how-to/hardening-your-cluster",
    recommended_action: "Disable legacy authorization on all Kubernetes clusters and use RBAC instead.",
    apis: &[PROJECTS_GET, KUBERNETES_CLUSTERS_LIST],
};

/// Look up catalog metadata by rule ID.
pub fn lookup_rule(rule_id: &str) -> Option<&'static RuleMeta> {
    match rule_id {
        ids::RULE_KUBERNETES_ALIAS_IP_RANGES_ENABLED => Some(&ALIAS_IP_RANGES_ENABLED),
        ids::RULE_KUBERNETES_NETWORK_POLICY_ENABLED => Some(&NETWORK_POLICY_ENABLED),
        ids::RULE_KUBERNETES_LEGACY_ABAC_DISABLED => Some(&LEGACY_ABAC_DISABLED),
        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_KUBERNETES_ALIAS_IP_RANGES_ENABLED,
        ids::RULE_KUBERNETES_NETWORK_POLICY_ENABLED,
        ids::RULE_KUBERNETES_LEGACY_ABAC_DISABLED,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_rule_id() {
        let meta = lookup_rule(ids::RULE_KUBERNETES_ALIAS_IP_RANGES_ENABLED).expect("known rule");
        assert_eq!(meta.title, "Alias IP Ranges Enabled");
        assert_eq!(meta.category, "Kubernetes");
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_rule("unknown.rule").is_none());
    }

    #[test]
    fn all_rule_ids_are_valid() {
        for id in all_rule_ids() {
            let meta = lookup_rule(id).unwrap_or_else(|| panic!("rule {id} should be in catalog"));
            assert_eq!(meta.id, *id);
            assert!(!meta.recommended_action.is_empty());
        }
    }

    #[test]
    fn every_rule_declares_the_project_lookup() {
        for id in all_rule_ids() {
            let meta = lookup_rule(id).expect("known rule");
            assert!(meta.apis.contains(&PROJECTS_GET), "{id} must declare projects:get");
        }
    }

    #[test]
    fn api_source_display() {
        assert_eq!(KUBERNETES_CLUSTERS_LIST.to_string(), "clusters.kubernetes:list");
    }
}
