//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - resource identity determinism
//! - aggregator append order under concurrent partitions
//! - one finding per collected record
//! - failure isolation between partitions

use crate::executor::for_each_partition;
use crate::findings::Findings;
use crate::fingerprint::fingerprint_for_finding;
use crate::policy::RuleSettings;
use crate::rules::AliasIpRangesEnabled;
use crate::test_support::{
    cache, cluster_record, clusters_entry, clusters_key, project_entry, run_rule_blocking,
};
use cloudguard_cache::CacheEntry;
use cloudguard_types::{Locality, Partition, ResourceId, Severity};
use futures::executor::block_on;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,20}").unwrap()
}

fn arb_region() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "us-central1",
        "us-east1",
        "us-west1",
        "europe-west1",
        "asia-east1",
        "australia-southeast1",
    ])
    .prop_map(str::to_string)
}

fn arb_locality() -> impl Strategy<Value = Option<Locality>> {
    prop_oneof![
        Just(None),
        Just(Some(Locality::Zone)),
        Just(Some(Locality::Region)),
        Just(Some(Locality::Location)),
        Just(Some(Locality::Global)),
    ]
}

#[derive(Clone, Debug)]
enum PartitionState {
    Absent,
    Failed,
    Clusters(Vec<Option<bool>>),
}

fn arb_partition_state() -> impl Strategy<Value = PartitionState> {
    prop_oneof![
        Just(PartitionState::Absent),
        Just(PartitionState::Failed),
        prop::collection::vec(prop::option::of(any::<bool>()), 0..8)
            .prop_map(PartitionState::Clusters),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn resource_ids_are_deterministic(
        kind in prop::sample::select(vec!["clusters", "instances", "buckets"]),
        name in arb_name(),
        project in prop_oneof![Just(String::new()), arb_name()],
        locality in arb_locality(),
        value in arb_region(),
    ) {
        let loc = locality.map(|l| (l, value.as_str()));
        let a = ResourceId::new(kind, &name, &project, loc);
        let b = ResourceId::new(kind, &name, &project, loc);
        prop_assert_eq!(&a, &b);
        let suffix = format!("{kind}/{name}");
        prop_assert!(a.as_str().ends_with(&suffix));
        prop_assert_eq!(a.as_str().starts_with("projects/"), !project.is_empty());
    }

    #[test]
    fn fingerprints_are_deterministic(
        rule in arb_name(),
        region in arb_region(),
        resource in prop::option::of(arb_name()),
    ) {
        let a = fingerprint_for_finding(&rule, &region, resource.as_deref());
        let b = fingerprint_for_finding(&rule, &region, resource.as_deref());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn partition_findings_keep_their_own_order(
        sizes in prop::collection::vec(0usize..6, 0..6),
    ) {
        let partitions: Vec<Partition> = (0..sizes.len())
            .map(|i| Partition::new(format!("region-{i}")))
            .collect();
        let findings = Findings::new();

        block_on(for_each_partition(&partitions, &findings, |partition| {
            let index: usize = partition.as_str()["region-".len()..].parse().unwrap_or(0);
            let n = sizes[index];
            let findings = &findings;
            async move {
                for seq in 0..n {
                    findings.record_partition(Severity::Ok, seq.to_string(), partition);
                }
                Ok(())
            }
        }));

        let results = findings.results();
        prop_assert_eq!(results.len(), sizes.iter().sum::<usize>());
        for partition in &partitions {
            let seqs: Vec<String> = results
                .iter()
                .filter(|f| &f.partition == partition)
                .map(|f| f.message.clone())
                .collect();
            let expected: Vec<String> = (0..seqs.len()).map(|i| i.to_string()).collect();
            prop_assert_eq!(seqs, expected);
        }
    }

    #[test]
    fn findings_follow_partition_state(
        states in prop::collection::btree_map(arb_region(), arb_partition_state(), 0..6),
    ) {
        let mut entries = vec![project_entry("proj1")];
        for (region, state) in &states {
            match state {
                PartitionState::Absent => {}
                PartitionState::Failed => {
                    entries.push((clusters_key(region), CacheEntry::failed("unavailable")));
                }
                PartitionState::Clusters(flags) => {
                    let records = flags
                        .iter()
                        .enumerate()
                        .map(|(i, flag)| cluster_record(&format!("c{i}"), *flag))
                        .collect();
                    entries.push(clusters_entry(region, records));
                }
            }
        }
        let cache = cache(entries);
        let regions: Vec<&str> = states.keys().map(String::as_str).collect();

        let out = run_rule_blocking(
            &AliasIpRangesEnabled,
            &cache,
            &regions,
            &RuleSettings::default(),
        );
        prop_assert!(out.error.is_none());

        for (region, state) in &states {
            let found: Vec<_> = out
                .findings
                .iter()
                .filter(|f| f.partition.as_str() == region.as_str())
                .collect();
            match state {
                PartitionState::Absent => prop_assert!(found.is_empty()),
                PartitionState::Failed => {
                    prop_assert_eq!(found.len(), 1);
                    prop_assert_eq!(found[0].severity, Severity::Unknown);
                }
                PartitionState::Clusters(flags) if flags.is_empty() => {
                    prop_assert_eq!(found.len(), 1);
                    prop_assert_eq!(found[0].severity, Severity::Ok);
                    prop_assert!(found[0].resource.is_none());
                }
                PartitionState::Clusters(flags) => {
                    prop_assert_eq!(found.len(), flags.len());
                    for (finding, flag) in found.iter().zip(flags) {
                        let expected = if *flag == Some(true) {
                            Severity::Ok
                        } else {
                            Severity::Failing
                        };
                        prop_assert_eq!(finding.severity, expected);
                        prop_assert!(finding.resource.is_some());
                    }
                }
            }
        }
    }
}
