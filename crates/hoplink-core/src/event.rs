use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A click event published to the analytics queue on successful resolution.
///
/// Serializes to `{"shortCode": "..."}`, with an optional `timestamp` field
/// when one was captured. Consumers must tolerate its absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEvent {
    pub short_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl ClickEvent {
    /// Creates an event for the given short code, stamped with the current time.
    pub fn now(code: &ShortCode) -> Self {
        Self {
            short_code: code.as_str().to_string(),
            timestamp: Some(Timestamp::now()),
        }
    }

    /// Creates an event carrying only the short code.
    pub fn bare(code: &ShortCode) -> Self {
        Self {
            short_code: code.as_str().to_string(),
            timestamp: None,
        }
    }
}
