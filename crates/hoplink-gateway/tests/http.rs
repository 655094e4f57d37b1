//! Router-level tests: status codes, headers, and JSON bodies.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use hoplink_analytics::NoopEventSink;
use hoplink_cache::MokaUrlCache;
use hoplink_core::error::StorageError;
use hoplink_core::{LinkRecord, LinkStore, ShortCode, UrlCache};
use hoplink_gateway::{App, AppState};
use hoplink_resolver::{ResolverConfig, ResolverService};
use hoplink_storage::InMemoryLinkStore;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

/// A store whose every call fails, for outage scenarios.
struct DownStore;

#[async_trait]
impl LinkStore for DownStore {
    async fn lookup(&self, _code: &ShortCode) -> Result<Option<LinkRecord>, StorageError> {
        Err(StorageError::Unavailable("connection refused".into()))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("connection refused".into()))
    }
}

fn app_with<S, C>(store: S, cache: C) -> axum::Router
where
    S: LinkStore,
    C: UrlCache,
{
    let store: Arc<dyn LinkStore> = Arc::new(store);
    let cache: Arc<dyn UrlCache> = Arc::new(cache);
    let resolver = ResolverService::new(
        Arc::clone(&store),
        Arc::clone(&cache),
        NoopEventSink,
        ResolverConfig::builder()
            .call_timeout(Duration::from_millis(200))
            .build(),
    );
    let state = AppState::new(
        Arc::new(resolver),
        store,
        cache,
        Duration::from_millis(200),
    );
    App::router(state)
}

async fn get(router: axum::Router, uri: &str) -> axum::http::Response<Body> {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn known_code_redirects_with_302() {
    let store = InMemoryLinkStore::new();
    store.insert(
        &ShortCode::new("fT7d8Xq").unwrap(),
        LinkRecord::new("https://example.com/page"),
    );

    let response = get(app_with(store, MokaUrlCache::new()), "/fT7d8Xq").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/page"
    );
}

#[tokio::test]
async fn unknown_code_returns_404_json() {
    let response = get(
        app_with(InMemoryLinkStore::new(), MokaUrlCache::new()),
        "/zzzzzzz",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Short URL not found");
}

#[tokio::test]
async fn malformed_code_returns_404_json() {
    let response = get(
        app_with(InMemoryLinkStore::new(), MokaUrlCache::new()),
        "/bad%20code",
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Short URL not found");
}

#[tokio::test]
async fn store_outage_returns_503_json() {
    let response = get(app_with(DownStore, MokaUrlCache::new()), "/anyCode").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Service temporarily unavailable");
}

#[tokio::test]
async fn cached_entry_survives_store_outage() {
    let cache = MokaUrlCache::new();
    cache
        .set(
            &ShortCode::new("fT7d8Xq").unwrap(),
            "https://example.com/page",
            Duration::from_secs(3600),
        )
        .await
        .unwrap();

    let response = get(app_with(DownStore, cache), "/fT7d8Xq").await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/page"
    );
}

#[tokio::test]
async fn health_ok_when_dependencies_answer() {
    let response = get(
        app_with(InMemoryLinkStore::new(), MokaUrlCache::new()),
        "/health",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_degraded_when_store_down() {
    let response = get(app_with(DownStore, MokaUrlCache::new()), "/health").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
