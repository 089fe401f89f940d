//! Finding aggregator.
//!
//! One instance per rule invocation. Partition tasks share it by reference,
//! so appends go through a mutex; the aggregator never edits, reorders or
//! deduplicates what was recorded.

use cloudguard_types::{Finding, Partition, ResourceId, Severity};
use serde_json::Value as JsonValue;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct Findings {
    inner: Mutex<Vec<Finding>>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, finding: Finding) {
        self.lock().push(finding);
    }

    /// Partition-level finding (no resource).
    pub fn record_partition(&self, severity: Severity, message: impl Into<String>, partition: &Partition) {
        self.record(Finding::new(severity, message, partition.clone()));
    }

    pub fn record_resource(
        &self,
        severity: Severity,
        message: impl Into<String>,
        partition: &Partition,
        resource: ResourceId,
    ) {
        self.record(Finding::new(severity, message, partition.clone()).with_resource(resource));
    }

    pub fn record_unknown(
        &self,
        message: impl Into<String>,
        partition: &Partition,
        error: Option<JsonValue>,
    ) {
        self.record(Finding::new(Severity::Unknown, message, partition.clone()).with_error(error));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Accumulated findings in append order.
    pub fn results(self) -> Vec<Finding> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Finding>> {
        // A panic elsewhere cannot leave a half-pushed Vec behind.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
