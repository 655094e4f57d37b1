use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "HOPLINK_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "HOPLINK_STORAGE_BACKEND";
pub const MYSQL_DSN_ENV: &str = "HOPLINK_MYSQL_DSN";
pub const REDIS_URL_ENV: &str = "HOPLINK_REDIS_URL";
pub const AMQP_URI_ENV: &str = "HOPLINK_AMQP_URI";
pub const CACHE_TTL_ENV: &str = "HOPLINK_CACHE_TTL_SECS";
pub const CALL_TIMEOUT_ENV: &str = "HOPLINK_CALL_TIMEOUT_SECS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "hoplink")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// Redis cache URL. Omit to run without a cache.
    #[arg(long, env = REDIS_URL_ENV)]
    pub redis_url: Option<String>,

    /// AMQP broker URI for analytics events. Omit to drop events.
    #[arg(long, env = AMQP_URI_ENV)]
    pub amqp_uri: Option<String>,

    #[arg(long, env = CACHE_TTL_ENV, default_value_t = 3600)]
    pub cache_ttl_secs: u64,

    #[arg(long, env = CALL_TIMEOUT_ENV, default_value_t = 5)]
    pub call_timeout_secs: u64,
}
