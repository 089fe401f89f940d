//! The contract every rule implements.

use crate::error::RuleError;
use crate::policy::{PartitionMap, RuleSettings};
use crate::sources::SourceLog;
use async_trait::async_trait;
use cloudguard_cache::DataSource;
use cloudguard_types::{ApiSource, Finding, RuleMeta};

/// Configuration handed to one rule invocation.
#[derive(Clone, Copy, Debug)]
pub struct RuleInput<'a> {
    /// Forwarded verbatim from the scan config.
    pub settings: &'a RuleSettings,
    pub partitions: &'a PartitionMap,
}

/// Uniform result of a rule invocation.
#[derive(Clone, Debug)]
pub struct RuleOutput {
    pub rule_id: &'static str,
    /// Set only when the invocation itself could not run to completion.
    pub error: Option<RuleError>,
    pub findings: Vec<Finding>,
    pub sources: SourceLog,
}

#[async_trait]
pub trait Rule: Send + Sync {
    fn meta(&self) -> &'static RuleMeta;

    fn id(&self) -> &'static str {
        self.meta().id
    }

    /// `(kind, operation)` pairs the collector must fetch before this rule runs.
    fn dependencies(&self) -> &'static [ApiSource] {
        self.meta().apis
    }

    /// Evaluate the rule. Data problems become UNKNOWN findings; this never fails.
    async fn run(&self, cache: &dyn DataSource, input: RuleInput<'_>) -> RuleOutput;
}
