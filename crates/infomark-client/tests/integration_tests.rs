//! Integration tests for infomark-client
//!
//! These tests run a small axum application that answers the way an InfoMark
//! server does (failures as status bodies, 404 plain text for unknown routes)
//! and drive it through the client.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use infomark_client::testing::TestServer;
use infomark_client::{
    ApiResponse, AuthResponse, Bid, ConnectionTarget, InfomarkClient, InfomarkError,
    RequestDescriptor, Method, Status, Token,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

// =============================================================================
// Mock InfoMark server
// =============================================================================

const EMAIL: &str = "test@uni-tuebingen.de";
const PASSWORD: &str = "test";
const ACCESS_TOKEN: &str = "T1";
const REFRESH_TOKEN: &str = "T2";

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

fn status(code: StatusCode, status: &str, error: &str) -> Response {
    (code, Json(json!({ "status": status, "error": error }))).into_response()
}

fn forbidden() -> Response {
    status(StatusCode::FORBIDDEN, "Forbidden", "access denied")
}

async fn token(Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL && body["plain_password"] == PASSWORD {
        Json(json!({
            "access": { "token": ACCESS_TOKEN },
            "refresh": { "token": REFRESH_TOKEN },
        }))
        .into_response()
    } else {
        status(StatusCode::NOT_FOUND, "Not Found", "wrong credentials")
    }
}

async fn create_session(Json(body): Json<Value>) -> Response {
    if body["email"] == EMAIL && body["plain_password"] == PASSWORD {
        Json(json!({ "root": false })).into_response()
    } else {
        status(StatusCode::BAD_REQUEST, "Bad Request", "wrong credentials")
    }
}

/// Accepts only the exact body `{email, confirmation_token}`
async fn confirm_email(Json(body): Json<Value>) -> Response {
    let expected = json!({ "email": EMAIL, "confirmation_token": "C1" });
    if body == expected {
        StatusCode::OK.into_response()
    } else {
        status(StatusCode::BAD_REQUEST, "Bad Request", "invalid confirmation token")
    }
}

/// Accepts only the exact body `{email, reset_password_token, plain_password}`
async fn update_password(Json(body): Json<Value>) -> Response {
    let expected = json!({
        "email": EMAIL,
        "reset_password_token": "R1",
        "plain_password": "new-secret",
    });
    if body == expected {
        StatusCode::OK.into_response()
    } else {
        status(StatusCode::BAD_REQUEST, "Bad Request", "invalid reset token")
    }
}

async fn delete_session(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(ACCESS_TOKEN) => StatusCode::OK.into_response(),
        _ => forbidden(),
    }
}

async fn exam_enrollments(headers: HeaderMap) -> Response {
    if bearer(&headers) != Some(ACCESS_TOKEN) {
        return forbidden();
    }
    Json(json!([
        { "status": 1, "mark": "1.3", "user_id": 4, "course_id": 1, "exam_id": 2 },
        { "status": 0, "mark": "", "user_id": 4, "course_id": 1, "exam_id": 3 },
    ]))
    .into_response()
}

async fn course_bids(headers: HeaderMap, Path(course_id): Path<i64>) -> Response {
    if bearer(&headers) != Some(ACCESS_TOKEN) {
        return forbidden();
    }
    if course_id != 1 {
        return status(StatusCode::NOT_FOUND, "Not Found", "course does not exist");
    }
    Json(json!([
        { "id": 1, "user_id": 4, "group_id": 2, "bid": 10 },
        { "id": 2, "user_id": 4, "group_id": 3, "bid": 0 },
    ]))
    .into_response()
}

/// Echo every received header so tests can inspect the wire request
async fn inspect_headers(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    let seen = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    Json(seen)
}

fn mock_infomark() -> Router {
    Router::new()
        .route("/api/v1/ping", get(|| async { "pong" }))
        .route(
            "/api/v1/version",
            get(|| async { Json(json!({ "commit": "a1b2c3", "version": "0.0.1-alpha" })) }),
        )
        .route(
            "/api/v1/privacy_statement",
            get(|| async { Json(json!({ "text": "We store your email." })) }),
        )
        .route("/api/v1/auth/token", post(token))
        .route("/api/v1/auth/sessions", post(create_session).delete(delete_session))
        .route(
            "/api/v1/auth/request_password_reset",
            post(|| async { StatusCode::OK }),
        )
        .route("/api/v1/auth/confirm_email", post(confirm_email))
        .route("/api/v1/auth/update_password", post(update_password))
        .route("/api/v1/account/exams/enrollments", get(exam_enrollments))
        .route("/api/v1/courses/{course_id}/bids", get(course_bids))
        .route("/api/v1/echo", post(|body: Bytes| async move { body }))
        .route("/api/v1/headers", get(inspect_headers).post(inspect_headers))
        .route("/api/v1/headers/delete", delete(inspect_headers))
        .route(
            "/api/v1/broken",
            get(|| async { (StatusCode::BAD_REQUEST, "400 bad request") }),
        )
}

async fn start() -> TestServer {
    TestServer::start(mock_infomark()).await.unwrap()
}

// =============================================================================
// Transport
// =============================================================================

#[tokio::test]
async fn test_ping_returns_body_verbatim() {
    let server = start().await;
    let pong = server.client().common().ping().await.unwrap();
    assert_eq!(pong, "pong");
}

#[tokio::test]
async fn test_post_echo_round_trip() {
    let server = start().await;
    let payload = json!({ "a": 1, "b": "two" });

    let body = server
        .client()
        .transport()
        .post("/api/v1/echo", &payload, None)
        .await
        .unwrap();

    let echoed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(echoed, payload);
}

#[tokio::test]
async fn test_post_sends_json_headers_and_defaults() {
    let server = start().await;
    let payload = json!({ "key": "value" });
    let expected_length = serde_json::to_vec(&payload).unwrap().len();

    let body = server
        .client()
        .transport()
        .post("/api/v1/headers", &payload, Some("abc"))
        .await
        .unwrap();
    let seen: BTreeMap<String, String> = serde_json::from_str(&body).unwrap();

    assert_eq!(seen["content-type"], "application/json");
    assert_eq!(seen["content-length"], expected_length.to_string());
    assert_eq!(seen["authorization"], "Bearer abc");
    assert_eq!(seen["accept"], "*/*");
    assert!(seen["user-agent"].starts_with("infomark-client/"));
}

#[tokio::test]
async fn test_get_without_token_sends_no_authorization() {
    let server = start().await;

    let body = server
        .client()
        .transport()
        .get("/api/v1/headers", None)
        .await
        .unwrap();
    let seen: BTreeMap<String, String> = serde_json::from_str(&body).unwrap();

    assert!(!seen.contains_key("authorization"));
    assert!(!seen.contains_key("content-type"));
}

#[tokio::test]
async fn test_delete_sends_token_and_content_type() {
    let server = start().await;

    let body = server
        .client()
        .transport()
        .delete("/api/v1/headers/delete", "xyz")
        .await
        .unwrap();
    let seen: BTreeMap<String, String> = serde_json::from_str(&body).unwrap();

    assert_eq!(seen["authorization"], "Bearer xyz");
    assert_eq!(seen["content-type"], "application/json");
}

#[tokio::test]
async fn test_per_call_header_overrides_default() {
    let server = start().await;
    let mut headers = infomark_client::Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());

    let request = RequestDescriptor::new(Method::Get, "/api/v1/headers").with_headers(headers);
    let body = server.client().transport().execute(request).await.unwrap();
    let seen: BTreeMap<String, String> = serde_json::from_str(&body).unwrap();

    assert_eq!(seen["accept"], "application/json");
}

#[tokio::test]
async fn test_repeated_get_is_stable() {
    let server = start().await;
    let transport = server.client().transport();

    let first = transport.get("/api/v1/version", None).await.unwrap();
    let second = transport.get("/api/v1/version", None).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_requests_on_clones() {
    let server = start().await;
    let a = server.client().clone();
    let b = server.client().clone();
    let (left, right) = (a.common(), b.common());

    let (left, right) = tokio::join!(left.ping(), right.ping());
    assert_eq!(left.unwrap(), "pong");
    assert_eq!(right.unwrap(), "pong");
}

#[tokio::test]
async fn test_error_status_body_is_returned_as_text() {
    let server = start().await;

    let body = server
        .client()
        .transport()
        .get("/api/v1/broken", None)
        .await
        .unwrap();
    assert_eq!(body, "400 bad request");

    let missing = server
        .client()
        .transport()
        .get("/api/v1/does-not-exist", None)
        .await;
    assert!(missing.is_ok());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = InfomarkClient::new("127.0.0.1", port, false).unwrap();

    let err = client.common().ping().await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err}");
}

#[tokio::test]
async fn test_connection_target_is_fixed() {
    let server = start().await;
    let target = server.client().transport().target();
    assert_eq!(target, &ConnectionTarget::new("127.0.0.1", server.addr().port(), false));
}

// =============================================================================
// Endpoints
// =============================================================================

#[tokio::test]
async fn test_token_success() {
    let server = start().await;

    let response = server.client().auth().token(EMAIL, PASSWORD).await.unwrap();

    assert_eq!(
        response,
        ApiResponse::Success(AuthResponse {
            access: Token {
                token: ACCESS_TOKEN.to_string()
            },
            refresh: Token {
                token: REFRESH_TOKEN.to_string()
            },
        })
    );
}

#[tokio::test]
async fn test_token_wrong_password_is_status() {
    let server = start().await;

    let response = server.client().auth().token(EMAIL, "nope").await.unwrap();

    let status = response.status().cloned().unwrap();
    assert_eq!(status.status, "Not Found");
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_create_session() {
    let server = start().await;

    let response = server
        .client()
        .auth()
        .create_session(EMAIL, PASSWORD)
        .await
        .unwrap();
    assert!(!response.success().unwrap().root);
}

#[tokio::test]
async fn test_delete_session_empty_body_is_success() {
    let server = start().await;

    let response = server.client().auth().delete_session(ACCESS_TOKEN).await.unwrap();
    assert_eq!(response, ApiResponse::Success(true));
}

#[tokio::test]
async fn test_delete_session_invalid_token_is_forbidden() {
    let server = start().await;

    let response = server.client().auth().delete_session("stale").await.unwrap();
    assert_eq!(
        response,
        ApiResponse::Status(Status {
            status: "Forbidden".to_string(),
            error: Some("access denied".to_string()),
        })
    );
}

#[tokio::test]
async fn test_request_password_reset() {
    let server = start().await;

    let response = server
        .client()
        .auth()
        .request_password_reset(EMAIL)
        .await
        .unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_confirm_email() {
    let server = start().await;

    let response = server
        .client()
        .auth()
        .confirm_email(EMAIL, "C1")
        .await
        .unwrap();
    assert_eq!(response, ApiResponse::Success(true));
}

#[tokio::test]
async fn test_confirm_email_wrong_token_is_status() {
    let server = start().await;

    let response = server
        .client()
        .auth()
        .confirm_email(EMAIL, "stale")
        .await
        .unwrap();
    assert_eq!(
        response,
        ApiResponse::Status(Status {
            status: "Bad Request".to_string(),
            error: Some("invalid confirmation token".to_string()),
        })
    );
}

#[tokio::test]
async fn test_update_password() {
    let server = start().await;

    let response = server
        .client()
        .auth()
        .update_password(EMAIL, "new-secret", "R1")
        .await
        .unwrap();
    assert_eq!(response, ApiResponse::Success(true));
}

#[tokio::test]
async fn test_update_password_wrong_token_is_status() {
    let server = start().await;

    let response = server
        .client()
        .auth()
        .update_password(EMAIL, "new-secret", "stale")
        .await
        .unwrap();
    assert_eq!(response.status().map(|s| s.status.as_str()), Some("Bad Request"));
}

#[tokio::test]
async fn test_version_and_privacy_statement() {
    let server = start().await;
    let common = server.client().common();

    let version = common.version().await.unwrap().into_result().unwrap();
    assert_eq!(version.version, "0.0.1-alpha");
    assert_eq!(version.commit, "a1b2c3");

    let privacy = common.privacy_statement().await.unwrap().success().unwrap();
    assert_eq!(privacy.text, "We store your email.");
}

#[tokio::test]
async fn test_exam_enrollments() {
    let server = start().await;

    let enrollments = server
        .client()
        .account()
        .exam_enrollments(ACCESS_TOKEN)
        .await
        .unwrap()
        .success()
        .unwrap();

    assert_eq!(enrollments.len(), 2);
    assert_eq!(enrollments[0].mark, "1.3");
    assert_eq!(enrollments[1].exam_id, 3);
}

#[tokio::test]
async fn test_exam_enrollments_without_valid_token() {
    let server = start().await;

    let response = server
        .client()
        .account()
        .exam_enrollments("stale")
        .await
        .unwrap();

    assert_eq!(response.status().map(|s| s.status.as_str()), Some("Forbidden"));
}

#[tokio::test]
async fn test_course_bids() {
    let server = start().await;

    let bids = server
        .client()
        .courses()
        .bids(ACCESS_TOKEN, 1)
        .await
        .unwrap()
        .success()
        .unwrap();

    assert_eq!(bids.len(), 2);
    assert_eq!(bids[0].bid, Bid::new(10).unwrap());
    assert_eq!(bids[1].group_id, 3);
}

#[tokio::test]
async fn test_course_bids_unknown_course() {
    let server = start().await;

    let response = server.client().courses().bids(ACCESS_TOKEN, 99).await.unwrap();
    assert_eq!(response.status().map(|s| s.status.as_str()), Some("Not Found"));
}

#[tokio::test]
async fn test_unwired_endpoint_reports_not_implemented() {
    let server = start().await;

    let err = server
        .client()
        .sheets()
        .get(ACCESS_TOKEN, 1, 2)
        .await
        .unwrap_err();

    match err {
        InfomarkError::NotImplemented { endpoint } => {
            assert_eq!(endpoint, "GET /api/v1/courses/1/sheets/2")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_plain_text_body_for_typed_call_is_parse_error() {
    let router = Router::new().route(
        "/api/v1/version",
        get(|| async { (StatusCode::NOT_FOUND, "404 page not found") }),
    );
    let server = TestServer::start(router).await.unwrap();

    let err = server.client().common().version().await.unwrap_err();
    assert!(matches!(err, InfomarkError::ParseError(_)));
}
