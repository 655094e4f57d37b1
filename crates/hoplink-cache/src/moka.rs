use async_trait::async_trait;
use hoplink_core::{CacheError, ShortCode, UrlCache};
use moka::future::Cache;
use std::time::Duration;
use tracing::{debug, trace};

pub type Result<T> = std::result::Result<T, CacheError>;

/// An in-memory [`UrlCache`] backed by Moka.
///
/// Useful for single-node deployments and tests. Expiration is a
/// cache-level policy set at construction; the per-call `ttl` argument is
/// ignored, which is within the advisory-cache contract (entries may
/// outlive or undercut the requested TTL).
#[derive(Debug, Clone)]
pub struct MokaUrlCache {
    cache: Cache<String, String>,
}

const DEFAULT_CAPACITY: u64 = 10_000;

impl MokaUrlCache {
    /// Creates a cache with the default capacity and no expiration.
    pub fn new() -> Self {
        let cache = Cache::builder().max_capacity(DEFAULT_CAPACITY).build();
        Self { cache }
    }

    /// Creates a cache whose entries expire after `ttl` from insertion.
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }
}

impl Default for MokaUrlCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlCache for MokaUrlCache {
    async fn get(&self, code: &ShortCode) -> Result<Option<String>> {
        trace!(code = %code, "fetching URL from Moka cache");

        match self.cache.get(code.as_str()).await {
            Some(url) => {
                debug!(code = %code, "cache hit in Moka");
                Ok(Some(url))
            }
            None => {
                trace!(code = %code, "cache miss in Moka");
                Ok(None)
            }
        }
    }

    async fn set(&self, code: &ShortCode, url: &str, _ttl: Duration) -> Result<()> {
        self.cache
            .insert(code.as_str().to_string(), url.to_string())
            .await;
        debug!(code = %code, "cached URL in Moka");
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    const TTL: Duration = Duration::from_secs(3600);

    #[tokio::test]
    async fn set_then_get() {
        let cache = MokaUrlCache::new();
        let c = code("fT7d8Xq");

        cache.set(&c, "https://example.com/page", TTL).await.unwrap();

        let url = cache.get(&c).await.unwrap();
        assert_eq!(url.as_deref(), Some("https://example.com/page"));
    }

    #[tokio::test]
    async fn get_missing() {
        let cache = MokaUrlCache::new();
        assert!(cache.get(&code("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites() {
        let cache = MokaUrlCache::new();
        let c = code("abc1234");

        cache.set(&c, "https://old.example", TTL).await.unwrap();
        cache.set(&c, "https://new.example", TTL).await.unwrap();

        let url = cache.get(&c).await.unwrap();
        assert_eq!(url.as_deref(), Some("https://new.example"));
    }

    #[tokio::test]
    async fn keys_are_case_sensitive() {
        let cache = MokaUrlCache::new();

        cache
            .set(&code("abcdefg"), "https://lower.example", TTL)
            .await
            .unwrap();

        assert!(cache.get(&code("ABCDEFG")).await.unwrap().is_none());
    }
}
