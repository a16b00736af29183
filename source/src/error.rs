use thiserror::Error;

/// Failure of the remote transaction source.
///
/// Timeouts are enforced by the adapter, not by the engine; they surface
/// here like any other failure.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Failure of the local failure store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
