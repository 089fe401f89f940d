use cloudguard_domain::policy::{FailOn, PartitionMap, RulePolicy, ScanConfig};
use cloudguard_types::{Partition, ids};
use std::collections::BTreeMap;

/// Regions scanned for Kubernetes clusters unless the config says otherwise.
///
/// Keep this in sync with the regions the collector fetches.
pub const KUBERNETES_REGIONS: &[&str] = &[
    "us-east1",
    "us-east4",
    "us-west1",
    "us-west2",
    "us-central1",
    "northamerica-northeast1",
    "southamerica-east1",
    "europe-west1",
    "europe-west2",
    "europe-west3",
    "europe-west4",
    "europe-north1",
    "asia-east1",
    "asia-east2",
    "asia-northeast1",
    "asia-south1",
    "asia-southeast1",
    "australia-southeast1",
];

pub fn default_partitions() -> PartitionMap {
    let mut map = PartitionMap::new();
    map.insert(
        ids::KIND_KUBERNETES_CLUSTERS,
        KUBERNETES_REGIONS.iter().copied().map(Partition::from).collect(),
    );
    map
}

/// Every catalog rule enabled, failing only on FAILING findings.
pub fn default_config() -> ScanConfig {
    let rules: BTreeMap<String, RulePolicy> = cloudguard_types::all_rule_ids()
        .iter()
        .map(|id| (id.to_string(), RulePolicy::enabled()))
        .collect();

    ScanConfig {
        fail_on: FailOn::Failing,
        partitions: default_partitions(),
        rules,
    }
}
