//! Callbacks used by the grading workers

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy)]
pub struct Internal<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Internal<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Report the public test result of a grade
    ///
    /// `POST /courses/{course_id}/grades/{grade_id}/public_result`
    pub async fn public_result(
        &self,
        _token: &str,
        course_id: i64,
        grade_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented(
            "POST",
            route!("courses", course_id, "grades", grade_id, "public_result"),
        )
    }

    /// Report the private test result of a grade
    ///
    /// `POST /courses/{course_id}/grades/{grade_id}/private_result`
    pub async fn private_result(
        &self,
        _token: &str,
        course_id: i64,
        grade_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented(
            "POST",
            route!("courses", course_id, "grades", grade_id, "private_result"),
        )
    }
}
