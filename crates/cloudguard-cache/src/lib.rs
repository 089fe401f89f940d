//! Data source cache: a read-only view over pre-fetched cloud API responses.
//!
//! The collector runs before any rule and publishes one [`CacheEntry`] per
//! `(kind, operation, partition)` it attempted. This crate owns that population
//! boundary: records are validated against per-kind schemas here, so rules only
//! ever see typed data.
//!
//! It is the only crate that reads collector dumps from disk.

#![forbid(unsafe_code)]

mod entry;
mod error;
mod key;
mod load;
mod memory;
pub mod records;

use async_trait::async_trait;
use std::sync::Arc;

pub use entry::{CacheEntry, FetchError};
pub use error::CacheError;
pub use key::SourceKey;
pub use load::{load_file, load_json};
pub use memory::{CacheBuilder, DataSourceCache};
pub use records::{Flag, FromRecord, Record};

/// Read access to cached API results.
///
/// `None` means the collector never attempted the key, which is distinct from
/// an entry holding an empty record list. Implementations must tolerate
/// concurrent readers.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn get(&self, key: &SourceKey) -> Option<Arc<CacheEntry>>;
}
