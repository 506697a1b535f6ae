//! Exercise sheets of a course

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{SheetPointsResponse, SheetRequest, SheetResponse};

#[derive(Debug, Clone, Copy)]
pub struct Sheets<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Sheets<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /courses/{course_id}/sheets`
    pub async fn list(&self, _token: &str, course_id: i64) -> Result<ApiResponse<Vec<SheetResponse>>> {
        not_implemented("GET", route!("courses", course_id, "sheets"))
    }

    /// `GET /courses/{course_id}/sheets/{sheet_id}`
    pub async fn get(
        &self,
        _token: &str,
        course_id: i64,
        sheet_id: i64,
    ) -> Result<ApiResponse<SheetResponse>> {
        not_implemented("GET", route!("courses", course_id, "sheets", sheet_id))
    }

    /// `POST /courses/{course_id}/sheets`
    pub async fn create(
        &self,
        _token: &str,
        course_id: i64,
        _sheet: &SheetRequest,
    ) -> Result<ApiResponse<SheetResponse>> {
        not_implemented("POST", route!("courses", course_id, "sheets"))
    }

    /// `PUT /courses/{course_id}/sheets/{sheet_id}`
    pub async fn update(
        &self,
        _token: &str,
        course_id: i64,
        sheet_id: i64,
        _sheet: &SheetRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("courses", course_id, "sheets", sheet_id))
    }

    /// `DELETE /courses/{course_id}/sheets/{sheet_id}`
    pub async fn delete(
        &self,
        _token: &str,
        course_id: i64,
        sheet_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("courses", course_id, "sheets", sheet_id))
    }

    /// `GET /courses/{course_id}/sheets/{sheet_id}/points`
    pub async fn points(
        &self,
        _token: &str,
        course_id: i64,
        sheet_id: i64,
    ) -> Result<ApiResponse<Vec<SheetPointsResponse>>> {
        not_implemented("GET", route!("courses", course_id, "sheets", sheet_id, "points"))
    }

    /// Sheet archive
    ///
    /// `GET /courses/{course_id}/sheets/{sheet_id}/file`
    pub async fn file(&self, _token: &str, course_id: i64, sheet_id: i64) -> Result<Vec<u8>> {
        not_implemented("GET", route!("courses", course_id, "sheets", sheet_id, "file"))
    }

    /// `POST /courses/{course_id}/sheets/{sheet_id}/file`
    pub async fn upload_file(
        &self,
        _token: &str,
        course_id: i64,
        sheet_id: i64,
        _archive: &[u8],
    ) -> Result<ApiResponse<bool>> {
        not_implemented("POST", route!("courses", course_id, "sheets", sheet_id, "file"))
    }
}
