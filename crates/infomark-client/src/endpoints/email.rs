//! Mail dispatch to users, groups and courses

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{EmailRequest, EnrollmentFilter};

#[derive(Debug, Clone, Copy)]
pub struct Email<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Email<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `POST /users/{user_id}/emails`
    pub async fn user(
        &self,
        _token: &str,
        user_id: i64,
        _mail: &EmailRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("users", user_id, "emails"))
    }

    /// `POST /courses/{course_id}/groups/{group_id}/emails`
    pub async fn group(
        &self,
        _token: &str,
        course_id: i64,
        group_id: i64,
        _mail: &EmailRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "groups", group_id, "emails"))
    }

    /// Mail every course member matching `filter`
    ///
    /// `POST /courses/{course_id}/emails`
    pub async fn course(
        &self,
        _token: &str,
        course_id: i64,
        _filter: &EnrollmentFilter,
        _mail: &EmailRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "emails"))
    }
}
