use serde::{Deserialize, Serialize};

/// JSON error body returned for 404 and 5xx responses.
///
/// Deliberately carries a fixed human-readable message and nothing else;
/// driver and infrastructure detail stays in the logs.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
