use crate::error::Result;
use async_trait::async_trait;
use hoplink_core::ShortCode;

/// A successful resolution, carrying the destination URL for the redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub long_url: String,
}

/// Resolves short codes to destination URLs.
///
/// The gateway depends on this trait rather than on the concrete service,
/// so handlers can be exercised against fakes.
#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    async fn resolve(&self, code: &ShortCode) -> Result<Resolution>;
}
