//! Student submissions

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{SubmissionFilter, SubmissionResponse};

#[derive(Debug, Clone, Copy)]
pub struct Submissions<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Submissions<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /courses/{course_id}/submissions`
    pub async fn list(
        &self,
        _token: &str,
        course_id: i64,
        _filter: &SubmissionFilter,
    ) -> Result<ApiResponse<Vec<SubmissionResponse>>> {
        not_implemented("GET", route!("courses", course_id, "submissions"))
    }

    /// The authenticated user's submission for a task
    ///
    /// `GET /courses/{course_id}/tasks/{task_id}/submission`
    pub async fn get(&self, _token: &str, course_id: i64, task_id: i64) -> Result<Vec<u8>> {
        not_implemented("GET", route!("courses", course_id, "tasks", task_id, "submission"))
    }

    /// `POST /courses/{course_id}/tasks/{task_id}/submission`
    pub async fn upload(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
        _archive: &[u8],
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "tasks", task_id, "submission"))
    }

    /// Submissions of a whole group for a task
    ///
    /// `GET /courses/{course_id}/tasks/{task_id}/groups/{group_id}`
    pub async fn group_task(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
        group_id: i64,
    ) -> Result<Vec<u8>> {
        not_implemented(
            "GET",
            route!("courses", course_id, "tasks", task_id, "groups", group_id),
        )
    }

    /// `GET /courses/{course_id}/tasks/{task_id}/groups/{group_id}/file`
    pub async fn group_task_file(
        &self,
        _token: &str,
        course_id: i64,
        task_id: i64,
        group_id: i64,
    ) -> Result<Vec<u8>> {
        not_implemented(
            "GET",
            route!("courses", course_id, "tasks", task_id, "groups", group_id, "file"),
        )
    }

    /// `GET /courses/{course_id}/submissions/{submission_id}/file`
    pub async fn file(&self, _token: &str, course_id: i64, submission_id: i64) -> Result<Vec<u8>> {
        not_implemented(
            "GET",
            route!("courses", course_id, "submissions", submission_id, "file"),
        )
    }
}
