//! Courses

use tracing::instrument;

use super::not_implemented;
use crate::error::Result;
use crate::response::{decode, ApiResponse};
use crate::transport::Transport;
use crate::types::{CourseRequest, CourseResponse, GroupBidsResponse, SheetPointsResponse};

#[derive(Debug, Clone, Copy)]
pub struct Courses<'a> {
    transport: &'a Transport,
}

impl<'a> Courses<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Group bids placed in a course
    ///
    /// `GET /courses/{course_id}/bids`
    #[instrument(skip(self, token))]
    pub async fn bids(
        &self,
        token: &str,
        course_id: i64,
    ) -> Result<ApiResponse<Vec<GroupBidsResponse>>> {
        let body = self
            .transport
            .get(&route!("courses", course_id, "bids"), Some(token))
            .await?;
        decode(&body)
    }

    /// Points per sheet for the authenticated user
    ///
    /// `GET /courses/{course_id}/points`
    pub async fn points(
        &self,
        _token: &str,
        course_id: i64,
    ) -> Result<ApiResponse<Vec<SheetPointsResponse>>> {
        not_implemented("GET", route!("courses", course_id, "points"))
    }

    /// `GET /courses`
    pub async fn list(&self, _token: &str) -> Result<ApiResponse<Vec<CourseResponse>>> {
        not_implemented("GET", route!("courses"))
    }

    /// `GET /courses/{course_id}`
    pub async fn get(&self, _token: &str, course_id: i64) -> Result<ApiResponse<CourseResponse>> {
        not_implemented("GET", route!("courses", course_id))
    }

    /// `POST /courses`
    pub async fn create(
        &self,
        _token: &str,
        _course: &CourseRequest,
    ) -> Result<ApiResponse<CourseResponse>> {
        not_implemented("POST", route!("courses"))
    }

    /// `PUT /courses/{course_id}`
    pub async fn update(
        &self,
        _token: &str,
        course_id: i64,
        _course: &CourseRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("courses", course_id))
    }

    /// `DELETE /courses/{course_id}`
    pub async fn delete(&self, _token: &str, course_id: i64) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("courses", course_id))
    }
}
