//! Authentication endpoints
//!
//! None of these keep the issued tokens. Callers hold the access token and
//! pass it to every authenticated call themselves.

use tracing::{debug, instrument};

use crate::error::Result;
use crate::response::{decode, decode_ack, ApiResponse};
use crate::transport::Transport;
use crate::types::{
    AuthResponse, ConfirmEmailRequest, LoginRequest, LoginResponse, ResetPasswordRequest,
    UpdatePasswordRequest,
};

#[derive(Debug, Clone, Copy)]
pub struct Auth<'a> {
    transport: &'a Transport,
}

impl<'a> Auth<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Exchange credentials for an access/refresh token pair
    ///
    /// `POST /auth/token`
    #[instrument(skip(self, password))]
    pub async fn token(&self, email: &str, password: &str) -> Result<ApiResponse<AuthResponse>> {
        let request = login(email, password);
        let body = self
            .transport
            .post(&route!("auth", "token"), &request, None)
            .await?;
        let response: ApiResponse<AuthResponse> = decode(&body)?;
        debug!(success = response.is_success(), "Token request answered");
        Ok(response)
    }

    /// Open a cookie session
    ///
    /// `POST /auth/sessions`
    #[instrument(skip(self, password))]
    pub async fn create_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ApiResponse<LoginResponse>> {
        let request = login(email, password);
        let body = self
            .transport
            .post(&route!("auth", "sessions"), &request, None)
            .await?;
        decode(&body)
    }

    /// End the session belonging to `token`. An empty answer means success.
    ///
    /// `DELETE /auth/sessions`
    #[instrument(skip(self, token))]
    pub async fn delete_session(&self, token: &str) -> Result<ApiResponse<bool>> {
        let body = self
            .transport
            .delete(&route!("auth", "sessions"), token)
            .await?;
        decode_ack(&body)
    }

    /// `POST /auth/request_password_reset`
    #[instrument(skip(self))]
    pub async fn request_password_reset(&self, email: &str) -> Result<ApiResponse<bool>> {
        let request = ResetPasswordRequest {
            email: email.to_string(),
        };
        let body = self
            .transport
            .post(&route!("auth", "request_password_reset"), &request, None)
            .await?;
        decode_ack(&body)
    }

    /// `POST /auth/confirm_email`
    #[instrument(skip(self, confirmation_token))]
    pub async fn confirm_email(
        &self,
        email: &str,
        confirmation_token: &str,
    ) -> Result<ApiResponse<bool>> {
        let request = ConfirmEmailRequest {
            email: email.to_string(),
            confirmation_token: confirmation_token.to_string(),
        };
        let body = self
            .transport
            .post(&route!("auth", "confirm_email"), &request, None)
            .await?;
        decode_ack(&body)
    }

    /// Set a new password using a token from a reset mail
    ///
    /// `POST /auth/update_password`
    #[instrument(skip(self, new_password, reset_password_token))]
    pub async fn update_password(
        &self,
        email: &str,
        new_password: &str,
        reset_password_token: &str,
    ) -> Result<ApiResponse<bool>> {
        let request = UpdatePasswordRequest {
            email: email.to_string(),
            reset_password_token: reset_password_token.to_string(),
            plain_password: new_password.to_string(),
        };
        let body = self
            .transport
            .post(&route!("auth", "update_password"), &request, None)
            .await?;
        decode_ack(&body)
    }
}

fn login(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        plain_password: password.to_string(),
    }
}
