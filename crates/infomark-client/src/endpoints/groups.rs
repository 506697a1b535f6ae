//! Exercise groups and group bidding

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{GroupBidRequest, GroupEnrollmentRequest, GroupRequest, GroupResponse};

#[derive(Debug, Clone, Copy)]
pub struct Groups<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Groups<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /courses/{course_id}/groups`
    pub async fn list(&self, _token: &str, course_id: i64) -> Result<ApiResponse<Vec<GroupResponse>>> {
        not_implemented("GET", route!("courses", course_id, "groups"))
    }

    /// Groups the authenticated user belongs to or tutors
    ///
    /// `GET /courses/{course_id}/groups/own`
    pub async fn own(&self, _token: &str, course_id: i64) -> Result<ApiResponse<Vec<GroupResponse>>> {
        not_implemented("GET", route!("courses", course_id, "groups", "own"))
    }

    /// `POST /courses/{course_id}/groups`
    pub async fn create(
        &self,
        _token: &str,
        course_id: i64,
        _group: &GroupRequest,
    ) -> Result<ApiResponse<GroupResponse>> {
        not_implemented("POST", route!("courses", course_id, "groups"))
    }

    /// `PUT /courses/{course_id}/groups/{group_id}`
    pub async fn update(
        &self,
        _token: &str,
        course_id: i64,
        group_id: i64,
        _group: &GroupRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("courses", course_id, "groups", group_id))
    }

    /// `DELETE /courses/{course_id}/groups/{group_id}`
    pub async fn delete(
        &self,
        _token: &str,
        course_id: i64,
        group_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("courses", course_id, "groups", group_id))
    }

    /// Move a user into a group
    ///
    /// `POST /courses/{course_id}/groups/{group_id}/enrollments`
    pub async fn enroll(
        &self,
        _token: &str,
        course_id: i64,
        group_id: i64,
        _enrollment: &GroupEnrollmentRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented(
            "POST",
            route!("courses", course_id, "groups", group_id, "enrollments"),
        )
    }

    /// `POST /courses/{course_id}/groups/{group_id}/bids`
    pub async fn bid(
        &self,
        _token: &str,
        course_id: i64,
        group_id: i64,
        _bid: &GroupBidRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "groups", group_id, "bids"))
    }
}
