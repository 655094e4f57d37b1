//! [`UrlCache`] implementations shared across hoplink services.
//!
//! [`RedisUrlCache`] is the production backend; [`MokaUrlCache`] serves
//! single-node deployments and tests; [`NoopUrlCache`] stands in when no
//! cache is configured, so the resolver always sees a miss.
//!
//! [`UrlCache`]: hoplink_core::UrlCache

pub mod moka;
pub mod noop;
pub mod redis;

pub use self::moka::MokaUrlCache;
pub use self::noop::NoopUrlCache;
pub use self::redis::RedisUrlCache;
