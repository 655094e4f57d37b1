use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::resolver::{Resolution, Resolver};
use async_trait::async_trait;
use hoplink_core::{ClickEvent, EventSink, LinkRecord, LinkStore, ShortCode, StorageError, UrlCache};
use tokio::time::timeout;
use tracing::{debug, trace, warn};

/// The resolution orchestrator.
///
/// Owns shared handles to the store, cache, and sink. All three are safe
/// for concurrent use; each in-flight request only borrows them for the
/// duration of its own calls, and every call carries a bounded timeout.
#[derive(Debug)]
pub struct ResolverService<S, C, E> {
    store: Arc<S>,
    cache: Arc<C>,
    sink: Arc<E>,
    config: ResolverConfig,
}

impl<S, C, E> Clone for ResolverService<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
            sink: Arc::clone(&self.sink),
            config: self.config.clone(),
        }
    }
}

impl<S, C, E> ResolverService<S, C, E>
where
    S: LinkStore,
    C: UrlCache,
    E: EventSink,
{
    pub fn new(store: S, cache: C, sink: E, config: ResolverConfig) -> Self {
        Self {
            store: Arc::new(store),
            cache: Arc::new(cache),
            sink: Arc::new(sink),
            config,
        }
    }

    /// Resolves a short code to its destination URL.
    ///
    /// See the crate docs for the full state machine. The returned future
    /// completes as soon as the URL is known; cache refill and event
    /// emission continue in background tasks bounded by the call timeout.
    pub async fn resolve(&self, code: &ShortCode) -> Result<Resolution> {
        Resolver::resolve(self, code).await
    }

    /// Cache read with every failure mode collapsed to a miss.
    ///
    /// Miss, timeout, and transport error are indistinguishable here;
    /// all three fall through to the store.
    async fn cached_url(&self, code: &ShortCode) -> Option<String> {
        match timeout(self.config.call_timeout, self.cache.get(code)).await {
            Ok(Ok(hit)) => hit,
            Ok(Err(e)) => {
                warn!(code = %code, error = %e, "cache read failed, treating as miss");
                None
            }
            Err(_) => {
                warn!(code = %code, "cache read timed out, treating as miss");
                None
            }
        }
    }

    /// Store lookup with the timeout folded into `Unavailable`.
    async fn lookup(&self, code: &ShortCode) -> std::result::Result<Option<LinkRecord>, StorageError> {
        match timeout(self.config.call_timeout, self.store.lookup(code)).await {
            Ok(result) => result,
            Err(_) => Err(StorageError::Timeout(format!(
                "store lookup exceeded {:?}",
                self.config.call_timeout
            ))),
        }
    }

    /// Best-effort cache refill, detached from the response path.
    fn spawn_refill(&self, code: &ShortCode, url: String) {
        let cache = Arc::clone(&self.cache);
        let code = code.clone();
        let ttl = self.config.cache_ttl;
        let deadline = self.config.call_timeout;

        tokio::spawn(async move {
            match timeout(deadline, cache.set(&code, &url, ttl)).await {
                Ok(Ok(())) => trace!(code = %code, "cache refilled"),
                Ok(Err(e)) => warn!(code = %code, error = %e, "cache refill failed"),
                Err(_) => warn!(code = %code, "cache refill timed out"),
            }
        });
    }

    /// Fire-and-forget event emission, detached from the response path.
    fn spawn_emit(&self, code: &ShortCode) {
        let sink = Arc::clone(&self.sink);
        let event = ClickEvent::now(code);
        let deadline = self.config.call_timeout;

        tokio::spawn(async move {
            match timeout(deadline, sink.publish(&event)).await {
                Ok(Ok(())) => trace!(code = %event.short_code, "click event emitted"),
                Ok(Err(e)) => warn!(code = %event.short_code, error = %e, "click event dropped"),
                Err(_) => warn!(code = %event.short_code, "click event publish timed out"),
            }
        });
    }
}

#[async_trait]
impl<S, C, E> Resolver for ResolverService<S, C, E>
where
    S: LinkStore,
    C: UrlCache,
    E: EventSink,
{
    async fn resolve(&self, code: &ShortCode) -> Result<Resolution> {
        trace!(code = %code, "resolving short code");

        if let Some(url) = self.cached_url(code).await {
            debug!(code = %code, "resolved from cache");
            self.spawn_emit(code);
            return Ok(Resolution { long_url: url });
        }

        let record = self
            .lookup(code)
            .await
            .map_err(ResolveError::Unavailable)?;

        let Some(record) = record else {
            debug!(code = %code, "short code not found in store");
            return Err(ResolveError::NotFound);
        };

        debug!(code = %code, url = %record.long_url, "resolved from store");
        self.spawn_refill(code, record.long_url.clone());
        self.spawn_emit(code);

        Ok(Resolution {
            long_url: record.long_url,
        })
    }
}

/// Yields to the runtime so detached refill/emit tasks can run.
#[cfg(test)]
async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}
