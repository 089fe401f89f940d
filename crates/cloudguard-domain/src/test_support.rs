use crate::policy::{FailOn, PartitionMap, RulePolicy, RuleSettings, ScanConfig};
use crate::rule::{Rule, RuleInput, RuleOutput};
use cloudguard_cache::records::{Cluster, IpAllocationPolicy, Project, Record};
use cloudguard_cache::{CacheEntry, DataSourceCache, SourceKey};
use cloudguard_types::catalog::{KUBERNETES_CLUSTERS_LIST, PROJECTS_GET};
use cloudguard_types::{Partition, ids};
use std::collections::BTreeMap;

pub fn project_entry(name: &str) -> (SourceKey, CacheEntry) {
    (
        SourceKey::for_api(PROJECTS_GET, &Partition::global()),
        CacheEntry::ok(vec![Record::Project(Project {
            name: name.to_string(),
            ..Project::default()
        })]),
    )
}

pub fn clusters_key(region: &str) -> SourceKey {
    SourceKey::for_api(KUBERNETES_CLUSTERS_LIST, &Partition::from(region))
}

pub fn clusters_entry(region: &str, clusters: Vec<Record>) -> (SourceKey, CacheEntry) {
    (clusters_key(region), CacheEntry::ok(clusters))
}

pub fn cluster_record(name: &str, use_ip_aliases: Option<bool>) -> Record {
    Record::Cluster(Cluster {
        name: name.to_string(),
        ip_allocation_policy: Some(IpAllocationPolicy { use_ip_aliases }),
        ..Cluster::default()
    })
}

pub fn cache(entries: Vec<(SourceKey, CacheEntry)>) -> DataSourceCache {
    let mut builder = DataSourceCache::builder();
    for (key, entry) in entries {
        builder.publish(key, entry).expect("unique test key");
    }
    builder.build()
}

pub fn cluster_partitions(regions: &[&str]) -> PartitionMap {
    let mut map = PartitionMap::new();
    map.insert(
        ids::KIND_KUBERNETES_CLUSTERS,
        regions.iter().copied().map(Partition::from).collect(),
    );
    map
}

pub fn config_with_rules(rule_ids: &[&str], regions: &[&str]) -> ScanConfig {
    let rules: BTreeMap<String, RulePolicy> = rule_ids
        .iter()
        .map(|id| (id.to_string(), RulePolicy::enabled()))
        .collect();
    ScanConfig {
        fail_on: FailOn::Failing,
        partitions: cluster_partitions(regions),
        rules,
    }
}

pub fn run_rule_blocking(
    rule: &dyn Rule,
    cache: &DataSourceCache,
    regions: &[&str],
    settings: &RuleSettings,
) -> RuleOutput {
    let partitions = cluster_partitions(regions);
    let input = RuleInput {
        settings,
        partitions: &partitions,
    };
    futures::executor::block_on(rule.run(cache, input))
}
