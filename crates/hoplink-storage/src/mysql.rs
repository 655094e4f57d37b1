use async_trait::async_trait;
use hoplink_core::error::StorageError;
use hoplink_core::store::{LinkStore, Result};
use hoplink_core::{LinkRecord, ShortCode};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySqlPool, Row};
use std::time::Duration;
use tracing::trace;

/// MySQL implementation of the link store contract.
///
/// Reads go through an sqlx connection pool: connections are established
/// lazily, reused across requests, and re-established when found broken,
/// so reconnection is invisible to `lookup` callers. Only a failure to
/// (re)acquire a working connection within the acquire timeout surfaces,
/// as `StorageError::Timeout`/`Unavailable`.
#[derive(Debug, Clone)]
pub struct MySqlLinkStore {
    pool: MySqlPool,
}

impl MySqlLinkStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new pool with the given acquire timeout.
    pub async fn connect(database_url: &str, acquire_timeout: Duration) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .acquire_timeout(acquire_timeout)
            .connect_lazy(database_url)
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_) => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl LinkStore for MySqlLinkStore {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        trace!(code = %code, "looking up short code in MySQL");

        let row = sqlx::query(
            r#"
            SELECT LongUrl, ClickCount
            FROM Links
            WHERE ShortCode = ?
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let long_url: String = row.try_get("LongUrl").map_err(map_sqlx_error)?;
        let click_count: i64 = row.try_get("ClickCount").map_err(map_sqlx_error)?;

        Ok(Some(LinkRecord {
            long_url,
            click_count: click_count.max(0) as u64,
        }))
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(map_sqlx_error)
    }
}
