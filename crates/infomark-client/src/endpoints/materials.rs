//! Lecture materials

use super::not_implemented;
use crate::error::Result;
use crate::response::ApiResponse;
use crate::transport::Transport;
use crate::types::{MaterialRequest, MaterialResponse};

#[derive(Debug, Clone, Copy)]
pub struct Materials<'a> {
    #[allow(dead_code)]
    transport: &'a Transport,
}

impl<'a> Materials<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /courses/{course_id}/materials`
    pub async fn list(
        &self,
        _token: &str,
        course_id: i64,
    ) -> Result<ApiResponse<Vec<MaterialResponse>>> {
        not_implemented("GET", route!("courses", course_id, "materials"))
    }

    /// `GET /courses/{course_id}/materials/{material_id}`
    pub async fn get(
        &self,
        _token: &str,
        course_id: i64,
        material_id: i64,
    ) -> Result<ApiResponse<MaterialResponse>> {
        not_implemented("GET", route!("courses", course_id, "materials", material_id))
    }

    /// `POST /courses/{course_id}/materials`
    pub async fn create(
        &self,
        _token: &str,
        course_id: i64,
        _material: &MaterialRequest,
    ) -> Result<ApiResponse<MaterialResponse>> {
        not_implemented("POST", route!("courses", course_id, "materials"))
    }

    /// `PUT /courses/{course_id}/materials/{material_id}`
    pub async fn update(
        &self,
        _token: &str,
        course_id: i64,
        material_id: i64,
        _material: &MaterialRequest,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("PUT", route!("courses", course_id, "materials", material_id))
    }

    /// `DELETE /courses/{course_id}/materials/{material_id}`
    pub async fn delete(
        &self,
        _token: &str,
        course_id: i64,
        material_id: i64,
    ) -> Result<ApiResponse<bool>> {
        not_implemented("DELETE", route!("courses", course_id, "materials", material_id))
    }

    /// `GET /courses/{course_id}/materials/{material_id}/file`
    pub async fn file(&self, _token: &str, course_id: i64, material_id: i64) -> Result<Vec<u8>> {
        not_implemented(
            "GET",
            route!("courses", course_id, "materials", material_id, "file"),
        )
    }

    /// `POST /courses/{course_id}/materials/{material_id}/file`
    pub async fn upload_file(
        &self,
        _token: &str,
        course_id: i64,
        material_id: i64,
        _file: &[u8],
    ) -> Result<ApiResponse<bool>> {
        not_implemented(
            "POST",
            route!("courses", course_id, "materials", material_id, "file"),
        )
    }
}
