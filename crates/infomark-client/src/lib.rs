//! InfoMark Client Library
//!
//! Provides a typed HTTP client for the InfoMark course management service.
//!
//! # Example
//!
//! ```rust,no_run
//! use infomark_client::{ApiResponse, InfomarkClient};
//!
//! #[tokio::main]
//! async fn main() -> infomark_client::Result<()> {
//!     let client = InfomarkClient::new("infomark.example.org", 443, true)?;
//!
//!     // Unauthenticated liveness check, body returned verbatim
//!     let pong = client.common().ping().await?;
//!
//!     // Obtain a token pair
//!     match client.auth().token("student@uni.de", "secret").await? {
//!         ApiResponse::Success(tokens) => {
//!             let enrollments = client
//!                 .account()
//!                 .exam_enrollments(&tokens.access.token)
//!                 .await?;
//!         }
//!         ApiResponse::Status(status) => eprintln!("login refused: {}", status),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Responses
//!
//! The service reports failures in the response body rather than through
//! HTTP status codes. Every typed call therefore yields an [`ApiResponse`]:
//! either the expected payload or the service's [`Status`] object. Errors
//! ([`InfomarkError`]) are reserved for transport failures, undecodable
//! bodies and endpoints this client does not wire up yet.
//!
//! # Testing
//!
//! The `testing` module runs an axum router on an ephemeral port:
//!
//! ```rust,ignore
//! use infomark_client::testing::TestServer;
//!
//! let server = TestServer::start(router).await?;
//! let pong = server.client().common().ping().await?;
//! ```

mod client;
mod config;
mod endpoints;
mod error;
pub mod response;
mod route;
pub mod testing;
pub mod transport;
mod types;

pub use client::InfomarkClient;
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError, ConnectionConfig, TimeoutsConfig};
pub use endpoints::{
    Account, Auth, Common, Courses, Email, Enrollments, Exams, Grades, Groups, Internal,
    Materials, Sheets, Submissions, Tasks, Users,
};
pub use error::{InfomarkError, Result};
pub use response::{decode, decode_ack, ApiResponse, Status};
pub use route::{build_route, route, API_VERSION};
pub use transport::{
    build_headers, merge_headers, ConnectionTarget, Headers, Method, RequestDescriptor, Scheme,
    Transport,
};
pub use types::*;
