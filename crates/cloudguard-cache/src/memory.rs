use crate::{CacheEntry, CacheError, DataSource, SourceKey};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

/// In-memory cache, immutable once built.
#[derive(Clone, Debug, Default)]
pub struct DataSourceCache {
    entries: BTreeMap<SourceKey, Arc<CacheEntry>>,
}

impl DataSourceCache {
    pub fn builder() -> CacheBuilder {
        CacheBuilder::default()
    }

    pub fn lookup(&self, key: &SourceKey) -> Option<Arc<CacheEntry>> {
        self.entries.get(key).cloned()
    }

    pub fn keys(&self) -> impl Iterator<Item = &SourceKey> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl DataSource for DataSourceCache {
    async fn get(&self, key: &SourceKey) -> Option<Arc<CacheEntry>> {
        self.lookup(key)
    }
}

/// Collects entries before the cache is handed to rules.
#[derive(Debug, Default)]
pub struct CacheBuilder {
    entries: BTreeMap<SourceKey, Arc<CacheEntry>>,
}

impl CacheBuilder {
    /// Publish one entry. A key can be published once.
    pub fn publish(&mut self, key: SourceKey, entry: CacheEntry) -> Result<(), CacheError> {
        match self.entries.entry(key) {
            Entry::Occupied(o) => Err(CacheError::Duplicate(o.key().clone())),
            Entry::Vacant(v) => {
                v.insert(Arc::new(entry));
                Ok(())
            }
        }
    }

    pub fn build(self) -> DataSourceCache {
        DataSourceCache {
            entries: self.entries,
        }
    }
}
