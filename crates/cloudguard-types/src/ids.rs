//! Stable identifiers for rules, resource kinds, and API operations.
//!
//! `rule_id` is a dotted namespace. Kinds and operations mirror the keys the
//! collector uses when it dumps API responses.

// Rules
pub const RULE_KUBERNETES_ALIAS_IP_RANGES_ENABLED: &str = "kubernetes.alias_ip_ranges_enabled";
pub const RULE_KUBERNETES_NETWORK_POLICY_ENABLED: &str = "kubernetes.network_policy_enabled";
pub const RULE_KUBERNETES_LEGACY_ABAC_DISABLED: &str = "kubernetes.legacy_abac_disabled";

// Resource kinds (cache keys)
pub const KIND_PROJECTS: &str = "projects";
pub const KIND_KUBERNETES_CLUSTERS: &str = "clusters.kubernetes";

// Resource kinds (identity segment)
pub const RESOURCE_CLUSTERS: &str = "clusters";

// Operations
pub const OP_GET: &str = "get";
pub const OP_LIST: &str = "list";
