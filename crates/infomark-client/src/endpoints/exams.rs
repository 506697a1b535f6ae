//! Exams of a course and exam enrollments

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{ExamEnrollmentResponse, ExamRequest, ExamResponse, UserExamRequest};

#[derive(Debug, Clone, Copy)]
pub struct Exams<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Exams<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /courses/{course_id}/exams`
    pub async fn list(&self, _token: &str, course_id: i64) -> Result<ApiResponse<Vec<ExamResponse>>> {
        not_implemented("GET", route!("courses", course_id, "exams"))
    }

    /// `GET /courses/{course_id}/exams/{exam_id}`
    pub async fn get(
        &self,
        _token: &str,
        course_id: i64,
        exam_id: i64,
    ) -> Result<ApiResponse<ExamResponse>> {
        not_implemented("GET", route!("courses", course_id, "exams", exam_id))
    }

    /// `POST /courses/{course_id}/exams`
    pub async fn create(
        &self,
        _token: &str,
        course_id: i64,
        _exam: &ExamRequest,
    ) -> Result<ApiResponse<ExamResponse>> {
        not_implemented("POST", route!("courses", course_id, "exams"))
    }

    /// `PUT /courses/{course_id}/exams/{exam_id}`
    pub async fn update(
        &self,
        _token: &str,
        course_id: i64,
        exam_id: i64,
        _exam: &ExamRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("courses", course_id, "exams", exam_id))
    }

    /// `DELETE /courses/{course_id}/exams/{exam_id}`
    pub async fn delete(
        &self,
        _token: &str,
        course_id: i64,
        exam_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("courses", course_id, "exams", exam_id))
    }

    /// `GET /courses/{course_id}/exams/{exam_id}/enrollments`
    pub async fn enrollments(
        &self,
        _token: &str,
        course_id: i64,
        exam_id: i64,
    ) -> Result<ApiResponse<Vec<ExamEnrollmentResponse>>> {
        not_implemented(
            "GET",
            route!("courses", course_id, "exams", exam_id, "enrollments"),
        )
    }

    /// Enroll the authenticated user in an exam
    ///
    /// `POST /courses/{course_id}/exams/{exam_id}/enrollments`
    pub async fn enroll(
        &self,
        _token: &str,
        course_id: i64,
        exam_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented(
            "POST",
            route!("courses", course_id, "exams", exam_id, "enrollments"),
        )
    }

    /// Record status and mark of a participant
    ///
    /// `PUT /courses/{course_id}/exams/{exam_id}/enrollments`
    pub async fn update_enrollment(
        &self,
        _token: &str,
        course_id: i64,
        exam_id: i64,
        _enrollment: &UserExamRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented(
            "PUT",
            route!("courses", course_id, "exams", exam_id, "enrollments"),
        )
    }

    /// `DELETE /courses/{course_id}/exams/{exam_id}/enrollments`
    pub async fn disenroll(
        &self,
        _token: &str,
        course_id: i64,
        exam_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented(
            "DELETE",
            route!("courses", course_id, "exams", exam_id, "enrollments"),
        )
    }
}
