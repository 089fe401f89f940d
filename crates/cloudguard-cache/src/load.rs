//! Collector dump loading.
//!
//! Dump layout:
//!
//! ```json
//! { "<kind>": { "<operation>": { "<partition>": { "err": <any>, "data": [ ... ] } } } }
//! ```
//!
//! A malformed entry or record does not fail the load: it becomes an entry
//! whose `err` describes the problem, so the rule reports that partition as
//! unknown. Kinds without a record schema are skipped: no rule reads them.

use crate::records::Record;
use crate::{CacheEntry, CacheError, DataSourceCache, FetchError, SourceKey};
use camino::Utf8Path;
use cloudguard_types::Partition;
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

/// Parse a collector dump into a cache.
pub fn load_json(text: &str) -> Result<DataSourceCache, CacheError> {
    let root: JsonValue = serde_json::from_str(text)?;
    let kinds = as_object(&root, "$")?;

    let mut builder = DataSourceCache::builder();
    for (kind, operations) in kinds {
        if !Record::is_known_kind(kind) {
            debug!(%kind, "skipping resource kind without a record schema");
            continue;
        }
        for (operation, partitions) in as_object(operations, &format!("$.{kind}"))? {
            let at = format!("$.{kind}.{operation}");
            for (partition, raw) in as_object(partitions, &at)? {
                let key = SourceKey::new(kind, operation, Partition::new(partition.as_str()));
                let entry = decode_entry(&key, raw);
                builder.publish(key, entry)?;
            }
        }
    }

    let cache = builder.build();
    debug!(entries = cache.len(), "loaded collector dump");
    Ok(cache)
}

/// Read and parse a collector dump file.
pub fn load_file(path: &Utf8Path) -> Result<DataSourceCache, CacheError> {
    let text = std::fs::read_to_string(path).map_err(|source| CacheError::Io {
        path: path.to_owned(),
        source,
    })?;
    load_json(&text)
}

fn as_object<'a>(value: &'a JsonValue, at: &str) -> Result<&'a Map<String, JsonValue>, CacheError> {
    value.as_object().ok_or_else(|| CacheError::Shape { at: at.to_string() })
}

fn decode_entry(key: &SourceKey, raw: &JsonValue) -> CacheEntry {
    let Some(obj) = raw.as_object() else {
        warn!(%key, "cache entry is not an object");
        return CacheEntry::failed(format!("malformed cache entry for {key}"));
    };

    let err = obj
        .get("err")
        .filter(|v| !v.is_null())
        .cloned()
        .map(FetchError::new);

    let data = match obj.get("data") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Array(items)) => match decode_records(&key.kind, items) {
            Ok(records) => Some(records),
            Err(message) => {
                warn!(%key, %message, "invalid record in cache entry");
                return CacheEntry::failed(err.unwrap_or_else(|| message.into()));
            }
        },
        Some(_) => {
            warn!(%key, "cache entry data is not an array");
            return CacheEntry::failed(err.unwrap_or_else(|| {
                format!("malformed data for {key}: expected an array").into()
            }));
        }
    };

    CacheEntry { err, data }
}

fn decode_records(kind: &str, items: &[JsonValue]) -> Result<Vec<Record>, String> {
    let mut records = Vec::with_capacity(items.len());
    for (index, raw) in items.iter().enumerate() {
        match Record::decode(kind, raw.clone()) {
            Ok(Some(record)) => records.push(record),
            Ok(None) => return Err(format!("no record schema for {kind}")),
            Err(e) => return Err(format!("invalid {kind} record at index {index}: {e}")),
        }
    }
    Ok(records)
}
