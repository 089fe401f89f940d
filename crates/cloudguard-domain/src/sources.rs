//! Tracks which cache entries a rule consulted.

use cloudguard_cache::{CacheEntry, DataSource, SourceKey};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Read-through wrapper around a [`DataSource`] that remembers every lookup,
/// including lookups for keys the collector never attempted.
pub struct ConsultedSources<'a> {
    cache: &'a dyn DataSource,
    log: Mutex<BTreeMap<SourceKey, Option<Arc<CacheEntry>>>>,
}

impl<'a> ConsultedSources<'a> {
    pub fn new(cache: &'a dyn DataSource) -> Self {
        Self {
            cache,
            log: Mutex::new(BTreeMap::new()),
        }
    }

    pub async fn get(&self, key: SourceKey) -> Option<Arc<CacheEntry>> {
        let entry = self.cache.get(&key).await;
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, entry.clone());
        entry
    }

    pub fn into_log(self) -> SourceLog {
        SourceLog(self.log.into_inner().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Cache entries consulted by one rule invocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceLog(BTreeMap<SourceKey, Option<Arc<CacheEntry>>>);

impl SourceLog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, key: &SourceKey) -> bool {
        self.0.contains_key(key)
    }

    /// The consulted entry, `Some(None)` when the lookup found nothing.
    pub fn get(&self, key: &SourceKey) -> Option<Option<&CacheEntry>> {
        self.0.get(key).map(Option::as_deref)
    }

    pub fn keys(&self) -> impl Iterator<Item = &SourceKey> {
        self.0.keys()
    }
}

/// Serializes as `kind -> operation -> partition -> entry | null`.
impl Serialize for SourceLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut nested: BTreeMap<&str, BTreeMap<&str, BTreeMap<&str, Option<&CacheEntry>>>> =
            BTreeMap::new();
        for (key, entry) in &self.0 {
            nested
                .entry(key.kind.as_str())
                .or_default()
                .entry(key.operation.as_str())
                .or_default()
                .insert(key.partition.as_str(), entry.as_deref());
        }
        nested.serialize(serializer)
    }
}
