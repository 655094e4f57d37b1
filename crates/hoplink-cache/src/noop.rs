use async_trait::async_trait;
use hoplink_core::{CacheError, ShortCode, UrlCache};
use std::time::Duration;

/// A cache that stores nothing.
///
/// Used when no cache backend is configured: every read is a miss, every
/// write succeeds, and the resolver falls through to the store on each
/// request.
#[derive(Debug, Clone, Default)]
pub struct NoopUrlCache;

#[async_trait]
impl UrlCache for NoopUrlCache {
    async fn get(&self, _code: &ShortCode) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _code: &ShortCode, _url: &str, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }
}
