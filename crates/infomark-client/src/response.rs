//! Response classification
//!
//! InfoMark bodies carry no discriminant. A body is a success when it has
//! every field the expected payload requires, and a status payload when it
//! instead looks like `{"status": "...", "error": "..."}`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{InfomarkError, Result};

/// Status payload the service uses to report failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{} ({})", self.status, error),
            None => f.write_str(&self.status),
        }
    }
}

/// Outcome of an endpoint call that reached the service
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// Body matched the expected payload
    Success(T),
    /// Body was a status payload
    Status(Status),
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// The success payload, if any
    pub fn success(self) -> Option<T> {
        match self {
            ApiResponse::Success(payload) => Some(payload),
            ApiResponse::Status(_) => None,
        }
    }

    /// The status payload, if any
    pub fn status(&self) -> Option<&Status> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Status(status) => Some(status),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(payload) => ApiResponse::Success(f(payload)),
            ApiResponse::Status(status) => ApiResponse::Status(status),
        }
    }

    /// Treat a status payload as an error
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success(payload) => Ok(payload),
            ApiResponse::Status(status) => Err(InfomarkError::Rejected(status)),
        }
    }
}

/// Classify a JSON body as `T` or as a status payload.
///
/// `T` is tried first. A body that is neither fails with the error from the
/// `T` attempt, since that is the shape the caller asked for.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<ApiResponse<T>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| InfomarkError::ParseError(e.to_string()))?;

    match T::deserialize(&value) {
        Ok(payload) => Ok(ApiResponse::Success(payload)),
        Err(payload_err) => match Status::deserialize(&value) {
            Ok(status) => Ok(ApiResponse::Status(status)),
            Err(_) => Err(InfomarkError::ParseError(payload_err.to_string())),
        },
    }
}

/// Classify the body of an endpoint that answers with nothing on success.
///
/// An empty body is `Success(true)`. Anything else must be a status payload.
pub fn decode_ack(body: &str) -> Result<ApiResponse<bool>> {
    if body.is_empty() {
        return Ok(ApiResponse::Success(true));
    }
    let status: Status =
        serde_json::from_str(body).map_err(|e| InfomarkError::ParseError(e.to_string()))?;
    Ok(ApiResponse::Status(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AuthResponse, ExamEnrollmentResponse, VersionResponse};

    #[test]
    fn test_decode_success() {
        let body = r#"{"access":{"token":"T1"},"refresh":{"token":"T2"}}"#;
        let response: ApiResponse<AuthResponse> = decode(body).unwrap();
        let auth = response.success().unwrap();
        assert_eq!(auth.access.token, "T1");
        assert_eq!(auth.refresh.token, "T2");
    }

    #[test]
    fn test_decode_status() {
        let body = r#"{"status":"Not Found"}"#;
        let response: ApiResponse<AuthResponse> = decode(body).unwrap();
        assert_eq!(
            response,
            ApiResponse::Status(Status {
                status: "Not Found".to_string(),
                error: None
            })
        );
    }

    #[test]
    fn test_decode_status_with_error() {
        let body = r#"{"status":"Bad Request","error":"credentials are wrong"}"#;
        let response: ApiResponse<VersionResponse> = decode(body).unwrap();
        let status = response.status().unwrap();
        assert_eq!(status.error.as_deref(), Some("credentials are wrong"));
        assert_eq!(status.to_string(), "Bad Request (credentials are wrong)");
    }

    #[test]
    fn test_decode_list_vs_status() {
        let list: ApiResponse<Vec<ExamEnrollmentResponse>> = decode("[]").unwrap();
        assert_eq!(list.success(), Some(vec![]));

        let status: ApiResponse<Vec<ExamEnrollmentResponse>> =
            decode(r#"{"status":"Forbidden"}"#).unwrap();
        assert_eq!(status.status().unwrap().status, "Forbidden");
    }

    #[test]
    fn test_decode_unknown_shape() {
        let result: Result<ApiResponse<VersionResponse>> = decode(r#"{"unexpected":1}"#);
        assert!(matches!(result, Err(InfomarkError::ParseError(_))));
    }

    #[test]
    fn test_decode_not_json() {
        let result: Result<ApiResponse<VersionResponse>> = decode("pong");
        assert!(matches!(result, Err(InfomarkError::ParseError(_))));
    }

    #[test]
    fn test_decode_empty_body_is_parse_error() {
        let result: Result<ApiResponse<VersionResponse>> = decode("");
        assert!(matches!(result, Err(InfomarkError::ParseError(_))));
    }

    #[test]
    fn test_decode_ack_empty() {
        assert_eq!(decode_ack("").unwrap(), ApiResponse::Success(true));
    }

    #[test]
    fn test_decode_ack_status() {
        let response = decode_ack(r#"{"status":"Forbidden"}"#).unwrap();
        assert_eq!(response.status().unwrap().status, "Forbidden");
    }

    #[test]
    fn test_decode_ack_garbage() {
        assert!(matches!(
            decode_ack("<html>"),
            Err(InfomarkError::ParseError(_))
        ));
    }

    #[test]
    fn test_into_result_and_map() {
        let ok: ApiResponse<u32> = ApiResponse::Success(2);
        assert_eq!(ok.map(|n| n * 2).into_result().unwrap(), 4);

        let rejected: ApiResponse<u32> = ApiResponse::Status(Status {
            status: "Forbidden".to_string(),
            error: None,
        });
        assert!(!rejected.is_success());
        assert!(matches!(
            rejected.into_result(),
            Err(InfomarkError::Rejected(_))
        ));
    }
}
