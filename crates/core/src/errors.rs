use thiserror::Error;

/// Failures a snapshot backend can surface. The store absorbs all of these:
/// a failing backend degrades the session to in-memory operation and the
/// caller never sees an error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("snapshot read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("snapshot write failed: {0}")]
    Write(#[source] std::io::Error),
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
