//! Error types for InfoMark client operations

use thiserror::Error;

use crate::config::ConfigError;
use crate::response::Status;

/// Result type alias for InfoMark client operations
pub type Result<T> = std::result::Result<T, InfomarkError>;

/// Errors that can occur during InfoMark client operations
///
/// HTTP status codes never produce an error on their own. The service
/// reports failures in the response body, which surfaces as
/// [`ApiResponse::Status`](crate::ApiResponse::Status) instead.
#[derive(Error, Debug)]
pub enum InfomarkError {
    /// Network-level failure (DNS, connection refused, reset, TLS)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Connection target and route do not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Header name or value cannot be sent on the wire
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Request payload could not be serialized to JSON
    #[error("Failed to serialize request: {0}")]
    SerializationError(String),

    /// Response body is not JSON or matches no expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Endpoint exists in the remote API but is not wired up in this client
    #[error("Endpoint not implemented: {endpoint}")]
    NotImplemented { endpoint: String },

    /// The service answered with a status payload
    #[error("Request rejected: {0}")]
    Rejected(Status),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl InfomarkError {
    /// Create a not-implemented error for the given endpoint description
    pub fn not_implemented(endpoint: impl Into<String>) -> Self {
        Self::NotImplemented {
            endpoint: endpoint.into(),
        }
    }

    /// True when the failure happened below HTTP (no response was received)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }

    /// True for placeholder endpoints
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_display() {
        let err = InfomarkError::not_implemented("GET /api/v1/courses");
        assert!(err.is_not_implemented());
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "Endpoint not implemented: GET /api/v1/courses"
        );
    }

    #[test]
    fn test_rejected_display() {
        let err = InfomarkError::Rejected(Status {
            status: "Forbidden".to_string(),
            error: None,
        });
        assert_eq!(err.to_string(), "Request rejected: Forbidden");
    }
}
