use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use hoplink_analytics::{AmqpEventSink, NoopEventSink};
use hoplink_cache::{NoopUrlCache, RedisUrlCache};
use hoplink_core::{EventSink, LinkStore, UrlCache};
use hoplink_gateway::cli::{StorageBackendArg, CLI};
use hoplink_gateway::{App, AppState};
use hoplink_resolver::{ResolverConfig, ResolverService};
use hoplink_storage::{InMemoryLinkStore, MySqlLinkStore};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;
    let call_timeout = Duration::from_secs(config.call_timeout_secs);

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        cache_ttl_secs = config.cache_ttl_secs,
        call_timeout_secs = config.call_timeout_secs,
        "starting hoplink gateway"
    );

    let store: Arc<dyn LinkStore> = match config.storage {
        StorageBackendArg::InMemory => Arc::new(InMemoryLinkStore::new()),
        StorageBackendArg::Mysql => {
            let dsn = config
                .mysql_dsn
                .ok_or_else(|| anyhow::anyhow!("mysql dsn is required for the mysql backend"))?;
            Arc::new(MySqlLinkStore::connect(&dsn, call_timeout).await?)
        }
    };

    let cache: Arc<dyn UrlCache> = match config.redis_url {
        Some(url) => Arc::new(RedisUrlCache::connect(&url).await?),
        None => {
            warn!("no redis url configured, running without a cache");
            Arc::new(NoopUrlCache)
        }
    };

    let sink: Arc<dyn EventSink> = match config.amqp_uri {
        Some(uri) => Arc::new(AmqpEventSink::new(uri)),
        None => {
            warn!("no amqp uri configured, analytics events will be dropped");
            Arc::new(NoopEventSink)
        }
    };

    let resolver = ResolverService::new(
        Arc::clone(&store),
        Arc::clone(&cache),
        sink,
        ResolverConfig::builder()
            .cache_ttl(Duration::from_secs(config.cache_ttl_secs))
            .call_timeout(call_timeout)
            .build(),
    );

    let state = AppState::new(Arc::new(resolver), store, cache, call_timeout);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");
    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
