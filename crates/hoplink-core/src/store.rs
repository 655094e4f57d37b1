use crate::error::StorageError;
use crate::record::LinkRecord;
use crate::shortcode::ShortCode;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Read-only access to the durable link store.
///
/// The store is the single source of truth for short code existence:
/// `Ok(None)` is an authoritative "not found", while `Err` means the
/// backend could not answer and the caller must surface a server error,
/// never a 404.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Point lookup of a short code.
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>>;

    /// Cheap liveness probe, used by health checks.
    async fn ping(&self) -> Result<()>;
}

#[async_trait]
impl<T: LinkStore + ?Sized> LinkStore for std::sync::Arc<T> {
    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        (**self).lookup(code).await
    }

    async fn ping(&self) -> Result<()> {
        (**self).ping().await
    }
}
