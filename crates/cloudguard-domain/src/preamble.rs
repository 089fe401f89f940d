//! Project resolution every rule performs before touching partitions.

use crate::findings::Findings;
use crate::sources::ConsultedSources;
use cloudguard_cache::SourceKey;
use cloudguard_cache::records::{FromRecord, Project};
use cloudguard_types::Partition;
use cloudguard_types::catalog::PROJECTS_GET;
use tracing::debug;

/// Resolve the containing project's name from `projects:get:global`.
///
/// When the entry is absent, carries an error, or holds no project record,
/// exactly one UNKNOWN finding is recorded at global scope and `None` is
/// returned; the caller must not evaluate any partition.
pub async fn resolve_project(sources: &ConsultedSources<'_>, findings: &Findings) -> Option<String> {
    let global = Partition::global();
    let entry = sources.get(SourceKey::for_api(PROJECTS_GET, &global)).await;

    let reason = match entry.as_deref() {
        None => "no project data was collected".to_string(),
        Some(entry) => match (&entry.err, entry.records()) {
            (Some(err), _) => err.to_string(),
            (None, None) => "no data returned".to_string(),
            (None, Some([])) => "no projects found".to_string(),
            (None, Some([first, ..])) => match Project::from_record(first) {
                Some(project) => return Some(project.name.clone()),
                None => format!("expected a project record, found {}", first.kind()),
            },
        },
    };

    debug!(%reason, "project lookup failed, skipping partitions");
    let error = entry.and_then(|e| e.err.as_ref().map(|err| err.as_json().clone()));
    findings.record_unknown(format!("Unable to query for projects: {reason}"), &global, error);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cache, cluster_record, project_entry};
    use cloudguard_cache::{CacheEntry, DataSourceCache};
    use cloudguard_types::Severity;
    use futures::executor::block_on;
    use serde_json::json;

    fn resolve(cache: &DataSourceCache) -> (Option<String>, Vec<cloudguard_types::Finding>) {
        let sources = ConsultedSources::new(cache);
        let findings = Findings::new();
        let project = block_on(resolve_project(&sources, &findings));
        (project, findings.results())
    }

    #[test]
    fn resolves_first_project_name() {
        let cache = cache(vec![project_entry("proj1")]);
        let (project, findings) = resolve(&cache);
        assert_eq!(project.as_deref(), Some("proj1"));
        assert!(findings.is_empty());
    }

    #[test]
    fn failures_record_one_global_unknown() {
        let global = || SourceKey::for_api(PROJECTS_GET, &Partition::global());
        let cases = vec![
            DataSourceCache::default(),
            cache(vec![(global(), CacheEntry::failed(json!({"message": "denied"})))]),
            cache(vec![(global(), CacheEntry::default())]),
            cache(vec![(global(), CacheEntry::ok(Vec::new()))]),
            cache(vec![(global(), CacheEntry::ok(vec![cluster_record("c", None)]))]),
        ];

        for cache in cases {
            let (project, findings) = resolve(&cache);
            assert!(project.is_none());
            assert_eq!(findings.len(), 1);
            assert_eq!(findings[0].severity, Severity::Unknown);
            assert!(findings[0].partition.is_global());
            assert!(findings[0].resource.is_none());
            assert!(findings[0].message.starts_with("Unable to query for projects: "));
        }
    }

    #[test]
    fn fetch_error_is_attached_as_context() {
        let key = SourceKey::for_api(PROJECTS_GET, &Partition::global());
        let cache = cache(vec![(key, CacheEntry::failed(json!({"message": "denied"})))]);
        let (_, findings) = resolve(&cache);
        assert_eq!(findings[0].message, "Unable to query for projects: denied");
        assert_eq!(findings[0].error, Some(json!({"message": "denied"})));
    }
}
