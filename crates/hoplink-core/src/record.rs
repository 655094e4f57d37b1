use serde::{Deserialize, Serialize};

/// A stored link record, owned by durable storage.
///
/// The resolution path only ever reads this. `click_count` exists in the
/// schema but is not incremented on resolution; click accounting happens
/// downstream of the analytics queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// The absolute destination URL.
    pub long_url: String,
    /// Lifetime click counter, maintained outside the resolution path.
    pub click_count: u64,
}

impl LinkRecord {
    /// Creates a record with a zeroed click counter.
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            click_count: 0,
        }
    }
}
