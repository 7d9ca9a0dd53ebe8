//! Unified error types for the Uplift client crates
//!
//! Every client module maps transport, serialization, and validation
//! failures into [`ClientError`] so callers handle a single taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Backend returned a non-success status
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Resource does not exist on the backend
    #[error("not found: {0}")]
    NotFound(String),

    /// Request never completed (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// Payload rejected before any request was issued
    #[error("validation error: {0}")]
    Validation(String),

    /// Response body did not match the expected shape
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ClientError {
    /// Map a non-success HTTP status and response text into an error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            404 => ClientError::NotFound(message),
            _ => ClientError::Api { status, message },
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Serialization(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::Validation(err.to_string())
    }
}

/// Error body shape returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_maps_404_to_not_found() {
        let err = ClientError::from_status(404, "no such event");
        assert!(matches!(err, ClientError::NotFound(msg) if msg == "no such event"));
    }

    #[test]
    fn test_from_status_keeps_other_statuses_as_api_errors() {
        let err = ClientError::from_status(500, "boom");
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_response_round_trip() {
        let body = r#"{"error":"Validation error: amount","status":400}"#;
        let parsed: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status, 400);
        assert!(parsed.error.contains("amount"));
    }
}
