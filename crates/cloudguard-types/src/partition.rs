use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker used for findings and cache keys that are not tied to a region or zone.
pub const GLOBAL: &str = "global";

/// A unit of independent iteration: a region, a zone, or the global pseudo-partition.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct Partition(String);

impl Partition {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn global() -> Self {
        Self(GLOBAL.to_string())
    }

    pub fn is_global(&self) -> bool {
        self.0 == GLOBAL
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Partition {
    fn from(value: &str) -> Self {
        Partition::new(value)
    }
}

impl From<String> for Partition {
    fn from(value: String) -> Self {
        Partition::new(value)
    }
}
