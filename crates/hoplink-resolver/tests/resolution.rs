//! End-to-end resolution scenarios over the real in-memory backends.

use std::sync::Arc;
use std::time::Duration;

use hoplink_analytics::RecordingEventSink;
use hoplink_cache::MokaUrlCache;
use hoplink_core::{LinkRecord, ShortCode, UrlCache};
use hoplink_resolver::{ResolveError, ResolverConfig, ResolverService};
use hoplink_storage::InMemoryLinkStore;

fn code(s: &str) -> ShortCode {
    ShortCode::new(s).expect("valid test code")
}

fn config() -> ResolverConfig {
    ResolverConfig::builder()
        .call_timeout(Duration::from_millis(200))
        .build()
}

async fn settle() {
    for _ in 0..16 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn cold_cache_resolves_and_warms() {
    let store = InMemoryLinkStore::new();
    store.insert(&code("fT7d8Xq"), LinkRecord::new("https://example.com/page"));
    let cache = MokaUrlCache::new();

    let service = ResolverService::new(
        store,
        cache.clone(),
        RecordingEventSink::new(),
        config(),
    );

    let res = service.resolve(&code("fT7d8Xq")).await.unwrap();
    assert_eq!(res.long_url, "https://example.com/page");

    settle().await;
    let warmed = cache.get(&code("fT7d8Xq")).await.unwrap();
    assert_eq!(warmed.as_deref(), Some("https://example.com/page"));
}

#[tokio::test]
async fn refill_does_not_alter_subsequent_resolutions() {
    let store = InMemoryLinkStore::new();
    store.insert(&code("fT7d8Xq"), LinkRecord::new("https://example.com/page"));

    let service = ResolverService::new(
        store,
        MokaUrlCache::new(),
        RecordingEventSink::new(),
        config(),
    );

    let first = service.resolve(&code("fT7d8Xq")).await.unwrap();
    settle().await;
    let second = service.resolve(&code("fT7d8Xq")).await.unwrap();

    assert_eq!(first.long_url, second.long_url);
}

#[tokio::test]
async fn unknown_code_is_not_found() {
    let service = ResolverService::new(
        InMemoryLinkStore::new(),
        MokaUrlCache::new(),
        RecordingEventSink::new(),
        config(),
    );

    let err = service.resolve(&code("zzzzzzz")).await.unwrap_err();
    assert!(matches!(err, ResolveError::NotFound));
}

#[tokio::test]
async fn events_carry_the_resolved_code() {
    let store = InMemoryLinkStore::new();
    store.insert(&code("fT7d8Xq"), LinkRecord::new("https://example.com/page"));
    let sink = Arc::new(RecordingEventSink::new());

    // Arc<T> implements EventSink, so the sink stays observable from here.
    let service = ResolverService::new(
        store,
        MokaUrlCache::new(),
        Arc::clone(&sink),
        config(),
    );

    service.resolve(&code("fT7d8Xq")).await.unwrap();
    settle().await;

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].short_code, "fT7d8Xq");
    assert!(events[0].timestamp.is_some());
}
