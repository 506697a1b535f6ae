//! Course memberships and roles

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{ChangeRoleInCourseRequest, EnrollmentFilter, EnrollmentResponse};

#[derive(Debug, Clone, Copy)]
pub struct Enrollments<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Enrollments<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /courses/{course_id}/enrollments`
    pub async fn list(
        &self,
        _token: &str,
        course_id: i64,
        _filter: &EnrollmentFilter,
    ) -> Result<ApiResponse<Vec<EnrollmentResponse>>> {
        not_implemented("GET", route!("courses", course_id, "enrollments"))
    }

    /// `GET /courses/{course_id}/groups/{group_id}/enrollments`
    pub async fn group(
        &self,
        _token: &str,
        course_id: i64,
        group_id: i64,
        _filter: &EnrollmentFilter,
    ) -> Result<ApiResponse<Vec<EnrollmentResponse>>> {
        not_implemented(
            "GET",
            route!("courses", course_id, "groups", group_id, "enrollments"),
        )
    }

    /// Enroll the authenticated user
    ///
    /// `POST /courses/{course_id}/enrollments`
    pub async fn enroll(&self, _token: &str, course_id: i64) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "enrollments"))
    }

    /// `PUT /courses/{course_id}/enrollments/{user_id}`
    pub async fn change_role(
        &self,
        _token: &str,
        course_id: i64,
        user_id: i64,
        _role: &ChangeRoleInCourseRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("courses", course_id, "enrollments", user_id))
    }

    /// `DELETE /courses/{course_id}/enrollments/{user_id}`
    pub async fn disenroll(
        &self,
        _token: &str,
        course_id: i64,
        user_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("courses", course_id, "enrollments", user_id))
    }
}
