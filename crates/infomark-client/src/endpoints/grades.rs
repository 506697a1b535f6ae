//! Grading

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{GradeRequest, GradeResponse, MissingGradeResponse};

#[derive(Debug, Clone, Copy)]
pub struct Grades<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Grades<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Point summary of a group. The response shape is undocumented.
    ///
    /// `GET /courses/{course_id}/grades/summary`
    pub async fn summary(
        &self,
        _token: &str,
        course_id: i64,
        _group_id: i64,
    ) -> Result<ApiResponse<serde_json::Value>> {
        not_implemented("GET", route!("courses", course_id, "grades", "summary"))
    }

    /// Grades the authenticated tutor has not finished
    ///
    /// `GET /courses/{course_id}/grades/missing`
    pub async fn missing(
        &self,
        _token: &str,
        course_id: i64,
    ) -> Result<ApiResponse<Vec<MissingGradeResponse>>> {
        not_implemented("GET", route!("courses", course_id, "grades", "missing"))
    }

    /// `GET /courses/{course_id}/grades/{grade_id}`
    pub async fn get(
        &self,
        _token: &str,
        course_id: i64,
        grade_id: i64,
    ) -> Result<ApiResponse<GradeResponse>> {
        not_implemented("GET", route!("courses", course_id, "grades", grade_id))
    }

    /// `PUT /courses/{course_id}/grades/{grade_id}`
    pub async fn update(
        &self,
        _token: &str,
        course_id: i64,
        grade_id: i64,
        _grade: &GradeRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("courses", course_id, "grades", grade_id))
    }
}
