use crate::SourceKey;
use camino::Utf8PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("read collector dump {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse collector dump")]
    Json(#[from] serde_json::Error),

    #[error("collector dump: expected an object at {at}")]
    Shape { at: String },

    #[error("cache entry already published: {0}")]
    Duplicate(SourceKey),
}
