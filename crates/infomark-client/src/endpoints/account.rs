//! The authenticated user's own account

use tracing::instrument;

use super::not_implemented;
use crate::error::Result;
use crate::response::{decode, ApiResponse};
use crate::transport::Transport;
use crate::types::{AccountRequest, CreateUserAccountRequest, ExamEnrollmentResponse, UserResponse};

#[derive(Debug, Clone, Copy)]
pub struct Account<'a> {
    transport: &'a Transport,
}

impl<'a> Account<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Exams the user is enrolled in
    ///
    /// `GET /account/exams/enrollments`
    #[instrument(skip(self, token))]
    pub async fn exam_enrollments(
        &self,
        token: &str,
    ) -> Result<ApiResponse<Vec<ExamEnrollmentResponse>>> {
        let body = self
            .transport
            .get(&route!("account", "exams", "enrollments"), Some(token))
            .await?;
        decode(&body)
    }

    /// `GET /account`
    pub async fn get(&self, _token: &str) -> Result<ApiResponse<UserResponse>> {
        not_implemented("GET", route!("account"))
    }

    /// Register a new account
    ///
    /// `POST /account`
    pub async fn create(&self, _request: &CreateUserAccountRequest) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("account"))
    }

    /// Change email or password
    ///
    /// `PATCH /account`
    pub async fn update(&self, _token: &str, _request: &AccountRequest) -> Result<ApiResponse<bool>> {
        not_implemented("PATCH", route!("account"))
    }

    /// `GET /account/avatar`
    pub async fn avatar(&self, _token: &str) -> Result<Vec<u8>> {
        not_implemented("GET", route!("account", "avatar"))
    }

    /// `POST /account/avatar`
    pub async fn upload_avatar(&self, _token: &str, _image: &[u8]) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("account", "avatar"))
    }

    /// `DELETE /account/avatar`
    pub async fn delete_avatar(&self, _token: &str) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("account", "avatar"))
    }
}
