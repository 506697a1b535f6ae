//! User administration and the `me` profile

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{EmailRequest, UserMeRequest, UserRequest, UserResponse};

#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Users<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /users`
    pub async fn list(&self, _token: &str) -> Result<ApiResponse<Vec<UserResponse>>> {
        not_implemented("GET", route!("users"))
    }

    /// `GET /users/{user_id}`
    pub async fn get(&self, _token: &str, user_id: i64) -> Result<ApiResponse<UserResponse>> {
        not_implemented("GET", route!("users", user_id))
    }

    /// `PUT /users/{user_id}`
    pub async fn update(
        &self,
        _token: &str,
        user_id: i64,
        _user: &UserRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("users", user_id))
    }

    /// `DELETE /users/{user_id}`
    pub async fn delete(&self, _token: &str, user_id: i64) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("users", user_id))
    }

    /// `GET /me`
    pub async fn me(&self, _token: &str) -> Result<ApiResponse<UserResponse>> {
        not_implemented("GET", route!("me"))
    }

    /// `PUT /me`
    pub async fn update_me(&self, _token: &str, _user: &UserMeRequest) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("me"))
    }

    /// `POST /users/{user_id}/emails`
    pub async fn send_email(
        &self,
        _token: &str,
        user_id: i64,
        _mail: &EmailRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("users", user_id, "emails"))
    }

    /// `GET /users/{user_id}/avatar`
    pub async fn avatar(&self, _token: &str, user_id: i64) -> Result<Vec<u8>> {
        not_implemented("GET", route!("users", user_id, "avatar"))
    }

    /// Search users by name, email or student number
    ///
    /// `GET /users/find`
    pub async fn find(&self, _token: &str, _query: &str) -> Result<ApiResponse<Vec<UserResponse>>> {
        not_implemented("GET", route!("users", "find"))
    }
}
