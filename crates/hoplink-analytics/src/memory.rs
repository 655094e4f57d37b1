use async_trait::async_trait;
use hoplink_core::sink::{EventSink, Result};
use hoplink_core::ClickEvent;
use std::sync::Mutex;

/// An in-memory [`EventSink`] that records every published event.
///
/// Used by tests to assert on emission without a broker.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<ClickEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything published so far.
    pub fn events(&self) -> Vec<ClickEvent> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }

    /// Number of events published so far.
    pub fn len(&self) -> usize {
        self.events.lock().expect("sink mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventSink for RecordingEventSink {
    async fn publish(&self, event: &ClickEvent) -> Result<()> {
        self.events
            .lock()
            .expect("sink mutex poisoned")
            .push(event.clone());
        Ok(())
    }
}
