//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` acknowledgement returned by actions that have no
/// resource to echo back (deletes, status changes, form submissions).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
