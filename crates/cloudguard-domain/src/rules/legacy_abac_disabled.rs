use super::utils::cluster_resource_id;
use crate::check::{Assessment, ResourceCheck};
use crate::error::RuleError;
use crate::policy::RuleSettings;
use cloudguard_cache::records::{Cluster, Flag};
use cloudguard_types::catalog::{KUBERNETES_CLUSTERS_LIST, LEGACY_ABAC_DISABLED};
use cloudguard_types::{ApiSource, Partition, ResourceId, RuleMeta, Severity};

/// Settings key choosing the severity for clusters that still use legacy ABAC:
/// `"failing"` (default) or `"warning"`.
pub const SETTING_ENABLED_SEVERITY: &str = "enabled_severity";

#[derive(Clone, Copy, Debug, Default)]
pub struct LegacyAbacDisabled;

impl LegacyAbacDisabled {
    fn enabled_severity(settings: &RuleSettings) -> Result<Severity, RuleError> {
        match settings.get(SETTING_ENABLED_SEVERITY) {
            None => Ok(Severity::Failing),
            Some(v) => match v.as_str() {
                Some("failing") => Ok(Severity::Failing),
                Some("warning") => Ok(Severity::Warning),
                _ => Err(RuleError::Settings(format!(
                    "{SETTING_ENABLED_SEVERITY} must be \"failing\" or \"warning\", got {v}"
                ))),
            },
        }
    }
}

impl ResourceCheck for LegacyAbacDisabled {
    type Resource = Cluster;

    fn meta(&self) -> &'static RuleMeta {
        &LEGACY_ABAC_DISABLED
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

    fn assess(&self, cluster: &Cluster, settings: &RuleSettings) -> Result<Assessment, RuleError> {
        match cluster.legacy_abac() {
            Flag::Enabled => {
                let message = "Legacy authorization is enabled for the Kubernetes cluster";
                Ok(match Self::enabled_severity(settings)? {
                    Severity::Warning => Assessment::warn(message),
                    _ => Assessment::fail(message),
                })
            }
            Flag::Disabled | Flag::Absent => Ok(Assessment::pass(
                "Legacy authorization is disabled for the Kubernetes cluster",
            )),
        }
    }
}
