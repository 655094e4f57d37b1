use std::time::Duration;
use typed_builder::TypedBuilder;

/// Tunables for the resolution path.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ResolverConfig {
    /// Time-to-live applied on cache refills.
    #[builder(default = Duration::from_secs(3600))]
    pub cache_ttl: Duration,
    /// Upper bound on each dependency call (cache get/set, store lookup,
    /// event publish). Expiry degrades per the component's contract; no
    /// call is ever left pending.
    #[builder(default = Duration::from_secs(5))]
    pub call_timeout: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.call_timeout, Duration::from_secs(5));
    }

    #[test]
    fn builder_overrides() {
        let config = ResolverConfig::builder()
            .cache_ttl(Duration::from_secs(60))
            .call_timeout(Duration::from_millis(500))
            .build();
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.call_timeout, Duration::from_millis(500));
    }
}
