use crate::error::EmitError;
use crate::event::ClickEvent;
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, EmitError>;

/// A sink for analytics click events.
///
/// Publishing is fire-and-forget at the call site: the resolver spawns
/// `publish` under a bounded timeout and only ever logs its outcome.
/// Implementations are free to fail; they must not panic.
#[async_trait]
pub trait EventSink: Send + Sync + 'static {
    /// Publish one click event to the analytics queue.
    async fn publish(&self, event: &ClickEvent) -> Result<()>;
}

#[async_trait]
impl<T: EventSink + ?Sized> EventSink for std::sync::Arc<T> {
    async fn publish(&self, event: &ClickEvent) -> Result<()> {
        (**self).publish(event).await
    }
}
