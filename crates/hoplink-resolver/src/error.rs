use hoplink_core::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Outcome of a failed resolution.
///
/// Only the store can produce these: `NotFound` is its authoritative
/// zero-rows answer, `Unavailable` wraps an infrastructure failure.
/// Cache and sink problems never appear here.
#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("short code not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(#[source] StorageError),
}
