use cloudguard_cache::records::Cluster;
use cloudguard_types::{Locality, Partition, ResourceId, ids};

/// Location used in a cluster's identity.
///
/// A single node location is used as-is. With several, the first zone is
/// reduced to its region by dropping the two-character zone suffix
/// (`us-central1-a` -> `us-central1`). Without any, the partition is used.
pub fn cluster_location<'a>(cluster: &'a Cluster, partition: &'a Partition) -> &'a str {
    match cluster.locations.as_deref() {
        Some([only]) => only.as_str(),
        Some([first, ..]) => {
            let cut = first.len().saturating_sub(2);
            first.get(..cut).unwrap_or(first)
        }
        _ => partition.as_str(),
    }
}

pub fn cluster_resource_id(cluster: &Cluster, project: &str, partition: &Partition) -> ResourceId {
    ResourceId::new(
        ids::RESOURCE_CLUSTERS,
        &cluster.name,
        project,
        Some((Locality::Location, cluster_location(cluster, partition))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(locations: Option<Vec<&str>>) -> Cluster {
        Cluster {
            name: "c1".to_string(),
            locations: locations.map(|l| l.into_iter().map(str::to_string).collect()),
            ..Cluster::default()
        }
    }

    #[test]
    fn single_location_is_used_verbatim() {
        let c = cluster(Some(vec!["us-central1-a"]));
        assert_eq!(cluster_location(&c, &Partition::from("us-central1")), "us-central1-a");
    }

    #[test]
    fn multiple_locations_collapse_to_region() {
        let c = cluster(Some(vec!["europe-west1-b", "europe-west1-c"]));
        assert_eq!(cluster_location(&c, &Partition::from("europe-west1")), "europe-west1");
    }

    #[test]
    fn missing_or_empty_locations_fall_back_to_partition() {
        let region = Partition::from("asia-east1");
        assert_eq!(cluster_location(&cluster(None), &region), "asia-east1");
        assert_eq!(cluster_location(&cluster(Some(Vec::new())), &region), "asia-east1");
    }

    #[test]
    fn short_or_multibyte_locations_do_not_panic() {
        let region = Partition::from("r");
        assert_eq!(cluster_location(&cluster(Some(vec!["a", "b"])), &region), "");
        assert_eq!(cluster_location(&cluster(Some(vec!["aéb", "x"])), &region), "aéb");
    }

    #[test]
    fn identity_embeds_project_and_location() {
        let c = cluster(Some(vec!["us-central1-a"]));
        let id = cluster_resource_id(&c, "proj1", &Partition::from("us-central1"));
        assert_eq!(id.as_str(), "projects/proj1/locations/us-central1-a/clusters/c1");
        assert_eq!(id, cluster_resource_id(&c, "proj1", &Partition::from("us-central1")));
    }
}
