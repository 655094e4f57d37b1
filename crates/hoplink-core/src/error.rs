use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors from cache backends.
///
/// Callers on the resolution path collapse every variant to a cache miss;
/// the distinction exists for logging and for tests.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
    #[error("cache operation timed out: {0}")]
    Timeout(String),
    #[error("cache value is invalid: {0}")]
    InvalidData(String),
    #[error("cache operation failed: {0}")]
    Operation(String),
}

/// Errors from the durable store.
///
/// Every variant means "unavailable" to the caller: a successful query with
/// zero rows is `Ok(None)`, never an error.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors from the analytics event sink.
#[derive(Debug, Clone, Error)]
pub enum EmitError {
    #[error("broker unavailable: {0}")]
    Unavailable(String),
    #[error("publish timed out: {0}")]
    Timeout(String),
    #[error("event serialization failed: {0}")]
    Serialization(String),
    #[error("publish failed: {0}")]
    Publish(String),
}
