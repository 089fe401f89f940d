use crate::rule::Rule;
use std::sync::Arc;

mod alias_ip_ranges_enabled;
mod legacy_abac_disabled;
mod network_policy_enabled;
mod utils;


pub use alias_ip_ranges_enabled::AliasIpRangesEnabled;
pub use legacy_abac_disabled::LegacyAbacDisabled;
pub use network_policy_enabled::NetworkPolicyEnabled;

/// Every rule shipped with the engine, in catalog order.
pub fn builtin_rules() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(AliasIpRangesEnabled),
        Arc::new(NetworkPolicyEnabled),
        Arc::new(LegacyAbacDisabled),
    ]
}
