use cloudguard_types::{ApiSource, Partition};
use serde::Serialize;
use std::fmt;

/// Compound cache key: `(resource kind, operation, partition)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SourceKey {
    pub kind: String,
    pub operation: String,
    pub partition: Partition,
}

impl SourceKey {
    pub fn new(kind: impl Into<String>, operation: impl Into<String>, partition: Partition) -> Self {
        Self {
            kind: kind.into(),
            operation: operation.into(),
            partition,
        }
    }

    pub fn for_api(api: ApiSource, partition: &Partition) -> Self {
        Self::new(api.kind, api.operation, partition.clone())
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.operation, self.partition)
    }
}
