//! Command implementations for infomark-cli

pub mod account;
pub mod auth;
pub mod common;
pub mod courses;

pub use account::enrollments;
pub use auth::{login, logout, reset_password, session};
pub use common::{ping, privacy, version};
pub use courses::bids;

use anyhow::{Context, Result};

/// Commands acting on behalf of a user need a bearer token
fn require_token(token: Option<&str>) -> Result<&str> {
    token.context("This command needs a token (--token or INFOMARK_TOKEN)")
}
