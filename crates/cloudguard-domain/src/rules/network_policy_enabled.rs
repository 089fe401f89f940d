use super::utils::cluster_resource_id;
use crate::check::{Assessment, ResourceCheck};
use crate::error::RuleError;
use crate::policy::RuleSettings;
use cloudguard_cache::records::{Cluster, Flag};
use cloudguard_types::catalog::{KUBERNETES_CLUSTERS_LIST, NETWORK_POLICY_ENABLED};
use cloudguard_types::{ApiSource, Partition, ResourceId, RuleMeta};

#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkPolicyEnabled;

impl ResourceCheck for NetworkPolicyEnabled {
    type Resource = Cluster;

    fn meta(&self) -> &'static RuleMeta {
        &NETWORK_POLICY_ENABLED
    }

    fn source(&self) -> ApiSource {
        KUBERNETES_CLUSTERS_LIST
    }

    fn noun(&self) -> &'static str {
        "Kubernetes clusters"
    }

    fn identify(&self, cluster: &Cluster, project: &str, partition: &Partition) -> ResourceId {
        cluster_resource_id(cluster, project, partition)
    }

    fn assess(&self, cluster: &Cluster, _settings: &RuleSettings) -> Result<Assessment, RuleError> {
        Ok(match cluster.network_policy() {
            Flag::Enabled => Assessment::pass("Kubernetes cluster has network policy enabled"),
            Flag::Disabled => Assessment::fail("Kubernetes cluster has network policy disabled"),
            Flag::Absent => Assessment::fail("Kubernetes cluster has no network policy configured"),
        })
    }
}
