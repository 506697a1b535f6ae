//! Tasks, their ratings and their test archives

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{
    GradeResponse, MissingTaskResponse, SheetTaskResponse, TaskRatingRequest, TaskRatingResponse,
    TaskRequest, TaskResponse,
};

#[derive(Debug, Clone, Copy)]
pub struct Tasks<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Tasks<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /courses/{course_id}/tasks/{task_id}`
    pub async fn get(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
    ) -> Result<ApiResponse<TaskResponse>> {
        not_implemented("GET", route!("courses", course_id, "tasks", task_id))
    }

    /// `PUT /courses/{course_id}/tasks/{task_id}`
    pub async fn update(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
        _task: &TaskRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("courses", course_id, "tasks", task_id))
    }

    /// `DELETE /courses/{course_id}/tasks/{task_id}`
    pub async fn delete(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("courses", course_id, "tasks", task_id))
    }

    /// `GET /courses/{course_id}/sheets/{sheet_id}/tasks`
    pub async fn sheet_tasks(
        &self,
        _token: &str,
        course_id: i64,
        sheet_id: i64,
    ) -> Result<ApiResponse<Vec<SheetTaskResponse>>> {
        not_implemented("GET", route!("courses", course_id, "sheets", sheet_id, "tasks"))
    }

    /// `POST /courses/{course_id}/sheets/{sheet_id}/tasks`
    pub async fn create_sheet_task(
        &self,
        _token: &str,
        course_id: i64,
        sheet_id: i64,
        _task: &TaskRequest,
    ) -> Result<ApiResponse<TaskResponse>> {
        not_implemented("POST", route!("courses", course_id, "sheets", sheet_id, "tasks"))
    }

    /// `GET /courses/{course_id}/tasks/{task_id}/ratings`
    pub async fn ratings(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
    ) -> Result<ApiResponse<TaskRatingResponse>> {
        not_implemented("GET", route!("courses", course_id, "tasks", task_id, "ratings"))
    }

    /// `POST /courses/{course_id}/tasks/{task_id}/ratings`
    pub async fn rate(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
        _rating: &TaskRatingRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "tasks", task_id, "ratings"))
    }

    /// `GET /courses/{course_id}/tasks/{task_id}/public_file`
    pub async fn public_file(&self, _token: &str, course_id: i64, task_id: i64) -> Result<Vec<u8>> {
        not_implemented("GET", route!("courses", course_id, "tasks", task_id, "public_file"))
    }

    /// `POST /courses/{course_id}/tasks/{task_id}/public_file`
    pub async fn upload_public_file(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
        _archive: &[u8],
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "tasks", task_id, "public_file"))
    }

    /// `GET /courses/{course_id}/tasks/{task_id}/private_file`
    pub async fn private_file(&self, _token: &str, course_id: i64, task_id: i64) -> Result<Vec<u8>> {
        not_implemented("GET", route!("courses", course_id, "tasks", task_id, "private_file"))
    }

    /// `POST /courses/{course_id}/tasks/{task_id}/private_file`
    pub async fn upload_private_file(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
        _archive: &[u8],
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "tasks", task_id, "private_file"))
    }

    /// Tasks without a submission by the authenticated user
    ///
    /// `GET /courses/{course_id}/tasks/missing`
    pub async fn missing(
        &self,
        _token: &str,
        course_id: i64,
    ) -> Result<ApiResponse<Vec<MissingTaskResponse>>> {
        not_implemented("GET", route!("courses", course_id, "tasks", "missing"))
    }

    /// Grade of the authenticated user's submission
    ///
    /// `GET /courses/{course_id}/tasks/{task_id}/result`
    pub async fn result(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
    ) -> Result<ApiResponse<GradeResponse>> {
        not_implemented("GET", route!("courses", course_id, "tasks", task_id, "result"))
    }
}
