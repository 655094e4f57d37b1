//! The resolution path: cache-aside lookup with fire-and-forget analytics.
//!
//! This crate provides [`ResolverService`], which orchestrates the cache,
//! the durable store, and the analytics sink into a single `resolve` call:
//!
//! 1. consult the cache; any error or timeout degrades to a miss;
//! 2. on miss, consult the store — its answer is authoritative;
//! 3. on a store hit, refill the cache in the background;
//! 4. emit a click event in the background;
//! 5. return the destination URL.
//!
//! Only store outcomes can surface to the caller: [`ResolveError::NotFound`]
//! for an authoritative miss, [`ResolveError::Unavailable`] when the store
//! could not answer. Cache and sink failures are logged and swallowed.
//!
//! # Example
//!
//! ```rust
//! use hoplink_resolver::{ResolverConfig, ResolverService};
//! use hoplink_storage::InMemoryLinkStore;
//! use hoplink_cache::MokaUrlCache;
//! use hoplink_analytics::NoopEventSink;
//! use hoplink_core::{LinkRecord, ShortCode};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryLinkStore::new();
//! let code = ShortCode::new("fT7d8Xq")?;
//! store.insert(&code, LinkRecord::new("https://example.com/page"));
//!
//! let service = ResolverService::new(
//!     store,
//!     MokaUrlCache::new(),
//!     NoopEventSink,
//!     ResolverConfig::default(),
//! );
//!
//! let resolution = service.resolve(&code).await?;
//! assert_eq!(resolution.long_url, "https://example.com/page");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod service;

pub use config::ResolverConfig;
pub use error::ResolveError;
pub use resolver::{Resolution, Resolver};
pub use service::ResolverService;
