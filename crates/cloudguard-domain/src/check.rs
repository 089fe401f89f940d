//! The common rule shape: resolve the project, then for every partition read
//! one cache entry and assess each resource in it.
//!
//! Implement [`ResourceCheck`] and the blanket impl provides [`Rule`]. Only
//! the predicate and the resource identity vary between rules.

use crate::error::RuleError;
use crate::executor::for_each_partition;
use crate::findings::Findings;
use crate::policy::RuleSettings;
use crate::preamble::resolve_project;
use crate::rule::{Rule, RuleInput, RuleOutput};
use crate::sources::ConsultedSources;
use async_trait::async_trait;
use cloudguard_cache::records::{FromRecord, Record};
use cloudguard_cache::{DataSource, SourceKey};
use cloudguard_types::{ApiSource, Finding, Partition, ResourceId, RuleMeta, Severity};
use std::borrow::Cow;
use std::panic::AssertUnwindSafe;
use tracing::{Instrument, debug, debug_span, warn};

/// Outcome of the predicate for one resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assessment {
    pub severity: Severity,
    pub message: Cow<'static, str>,
}

impl Assessment {
    pub fn pass(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            severity: Severity::Failing,
            message: message.into(),
        }
    }
}

pub trait ResourceCheck: Send + Sync {
    type Resource: FromRecord + Sync;

    fn meta(&self) -> &'static RuleMeta;

    /// Cache source holding the resources; its kind selects the partitions.
    fn source(&self) -> ApiSource;

    /// Plural noun used in partition-level messages, e.g. "Kubernetes clusters".
    fn noun(&self) -> &'static str;

    fn identify(&self, resource: &Self::Resource, project: &str, partition: &Partition) -> ResourceId;

    fn assess(&self, resource: &Self::Resource, settings: &RuleSettings) -> Result<Assessment, RuleError>;
}

#[async_trait]
impl<T: ResourceCheck> Rule for T {
    fn meta(&self) -> &'static RuleMeta {
        ResourceCheck::meta(self)
    }

    async fn run(&self, cache: &dyn DataSource, input: RuleInput<'_>) -> RuleOutput {
        let rule_id = ResourceCheck::meta(self).id;
        let sources = ConsultedSources::new(cache);
        let findings = Findings::new();

        async {
            let Some(project) = resolve_project(&sources, &findings).await else {
                return;
            };
            let partitions = input.partitions.for_kind(self.source().kind);
            debug!(partitions = partitions.len(), "evaluating partitions");

            let (sources, findings, project) = (&sources, &findings, project.as_str());
            for_each_partition(partitions, findings, |partition| {
                scan_partition(self, sources, findings, input.settings, project, partition)
            })
            .await;
        }
        .instrument(debug_span!("rule", rule = rule_id))
        .await;

        RuleOutput {
            rule_id,
            error: None,
            findings: findings.results(),
            sources: sources.into_log(),
        }
    }
}

async fn scan_partition<T: ResourceCheck>(
    check: &T,
    sources: &ConsultedSources<'_>,
    findings: &Findings,
    settings: &RuleSettings,
    project: &str,
    partition: &Partition,
) -> Result<(), RuleError> {
    let Some(entry) = sources.get(SourceKey::for_api(check.source(), partition)).await else {
        debug!(%partition, "not collected, skipping");
        return Ok(());
    };

    if let Some(err) = &entry.err {
        findings.record_unknown(
            format!("Unable to query {}", check.noun()),
            partition,
            Some(err.as_json().clone()),
        );
        return Ok(());
    }

    let Some(records) = entry.records() else {
        findings.record_unknown(format!("Unable to query {}", check.noun()), partition, None);
        return Ok(());
    };

    if records.is_empty() {
        findings.record_partition(Severity::Ok, format!("No {} found", check.noun()), partition);
        return Ok(());
    }

    for record in records {
        assess_record(check, findings, settings, project, partition, record);
    }
    Ok(())
}

/// Record exactly one finding for `record`. Predicate errors and panics stay
/// scoped to this resource.
fn assess_record<T: ResourceCheck>(
    check: &T,
    findings: &Findings,
    settings: &RuleSettings,
    project: &str,
    partition: &Partition,
    record: &Record,
) {
    let Some(resource) = T::Resource::from_record(record) else {
        let err = RuleError::UnexpectedRecord {
            expected: T::Resource::KIND,
            found: record.kind(),
        };
        findings.record_unknown(format!("Unable to evaluate resource: {err}"), partition, None);
        return;
    };

    let evaluated = std::panic::catch_unwind(AssertUnwindSafe(|| {
        let id = check.identify(resource, project, partition);
        (id, check.assess(resource, settings))
    }));

    match evaluated {
        Ok((id, Ok(assessment))) => {
            findings.record_resource(assessment.severity, assessment.message, partition, id);
        }
        Ok((id, Err(err))) => {
            warn!(%partition, resource = %id, error = %err, "resource evaluation failed");
            findings.record(
                Finding::new(
                    Severity::Unknown,
                    format!("Unable to evaluate resource: {err}"),
                    partition.clone(),
                )
                .with_resource(id),
            );
        }
        Err(payload) => {
            let err = RuleError::from_panic(payload.as_ref());
            warn!(%partition, error = %err, "resource evaluation panicked");
            findings.record_unknown(format!("Unable to evaluate resource: {err}"), partition, None);
        }
    }
}
