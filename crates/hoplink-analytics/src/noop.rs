use async_trait::async_trait;
use hoplink_core::sink::{EventSink, Result};
use hoplink_core::ClickEvent;
use tracing::trace;

/// An [`EventSink`] that discards everything.
///
/// Used when no broker is configured; resolutions proceed without
/// analytics, which the emission contract permits.
#[derive(Debug, Clone, Default)]
pub struct NoopEventSink;

#[async_trait]
impl EventSink for NoopEventSink {
    async fn publish(&self, event: &ClickEvent) -> Result<()> {
        trace!(code = %event.short_code, "discarding click event (no sink configured)");
        Ok(())
    }
}
