use crate::records::Record;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;

/// Error the collector captured while fetching, kept in its raw form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FetchError(JsonValue);

impl FetchError {
    pub fn new(raw: JsonValue) -> Self {
        Self(raw)
    }

    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }
}

impl From<JsonValue> for FetchError {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}

impl From<&str> for FetchError {
    fn from(value: &str) -> Self {
        Self(JsonValue::String(value.to_string()))
    }
}

impl From<String> for FetchError {
    fn from(value: String) -> Self {
        Self(JsonValue::String(value))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            JsonValue::String(s) => f.write_str(s),
            JsonValue::Object(obj) => match obj.get("message").and_then(JsonValue::as_str) {
                Some(message) => f.write_str(message),
                None => write!(f, "{}", self.0),
            },
            other => write!(f, "{other}"),
        }
    }
}

/// Result of one API query the collector already executed.
///
/// Entries are shared behind `Arc` once published and never change afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CacheEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<FetchError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Record>>,
}

impl CacheEntry {
    pub fn ok(data: Vec<Record>) -> Self {
        Self {
            err: None,
            data: Some(data),
        }
    }

    pub fn failed(err: impl Into<FetchError>) -> Self {
        Self {
            err: Some(err.into()),
            data: None,
        }
    }

    pub fn records(&self) -> Option<&[Record]> {
        self.data.as_deref()
    }
}
