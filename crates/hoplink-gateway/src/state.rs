use std::sync::Arc;
use std::time::Duration;

use hoplink_core::{LinkStore, UrlCache};
use hoplink_resolver::Resolver;

/// Shared handler state.
///
/// The store and cache handles exist here only for the health check;
/// resolution goes through the [`Resolver`] alone.
#[derive(Clone)]
pub struct AppState {
    resolver: Arc<dyn Resolver>,
    store: Arc<dyn LinkStore>,
    cache: Arc<dyn UrlCache>,
    probe_timeout: Duration,
}

impl AppState {
    pub fn new(
        resolver: Arc<dyn Resolver>,
        store: Arc<dyn LinkStore>,
        cache: Arc<dyn UrlCache>,
        probe_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            store,
            cache,
            probe_timeout,
        }
    }

    pub fn resolver(&self) -> &Arc<dyn Resolver> {
        &self.resolver
    }

    pub fn store(&self) -> &Arc<dyn LinkStore> {
        &self.store
    }

    pub fn cache(&self) -> &Arc<dyn UrlCache> {
        &self.cache
    }

    pub fn probe_timeout(&self) -> Duration {
        self.probe_timeout
    }
}
