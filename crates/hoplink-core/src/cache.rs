use crate::error::CacheError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, CacheError>;

/// A short-code to URL cache.
///
/// The cache is strictly advisory: an absent entry says nothing about
/// existence, and implementations may drop entries at any time. Errors are
/// typed so the degrade-to-miss branch in the resolver is explicit and
/// testable, but no cache outcome may ever influence the user-visible
/// result beyond latency.
#[async_trait]
pub trait UrlCache: Send + Sync + 'static {
    /// Get the cached URL for a short code.
    ///
    /// Returns `Ok(None)` if the key is not in the cache.
    async fn get(&self, code: &ShortCode) -> Result<Option<String>>;

    /// Store a mapping with a time-to-live.
    async fn set(&self, code: &ShortCode, url: &str, ttl: Duration) -> Result<()>;

    /// Cheap liveness probe, used by health checks.
    async fn ping(&self) -> Result<()>;
}

#[async_trait]
impl<T: UrlCache + ?Sized> UrlCache for std::sync::Arc<T> {
    async fn get(&self, code: &ShortCode) -> Result<Option<String>> {
        (**self).get(code).await
    }

    async fn set(&self, code: &ShortCode, url: &str, ttl: Duration) -> Result<()> {
        (**self).set(code, url, ttl).await
    }

    async fn ping(&self) -> Result<()> {
        (**self).ping().await
    }
}
