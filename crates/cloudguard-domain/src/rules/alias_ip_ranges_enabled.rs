use super::utils::cluster_resource_id;
use crate::check::{Assessment, ResourceCheck};
use crate::error::RuleError;
use crate::policy::RuleSettings;
use cloudguard_cache::records::{Cluster, Flag};
use cloudguard_types::catalog::{ALIAS_IP_RANGES_ENABLED, KUBERNETES_CLUSTERS_LIST};
use cloudguard_types::{ApiSource, Partition, ResourceId, RuleMeta};

#[derive(Clone, Copy, Debug, Default)]
pub struct AliasIpRangesEnabled;

impl ResourceCheck for AliasIpRangesEnabled {
    type Resource = Cluster;

    fn meta(&self) -> &'static RuleMeta {
        &ALIAS_IP_RANGES_ENABLED
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
        Ok(match cluster.ip_aliases() {
            Flag::Enabled => Assessment::pass("Kubernetes alias IP ranges enabled"),
            Flag::Disabled | Flag::Absent => Assessment::fail("Kubernetes alias IP ranges disabled"),
        })
    }
}
