//! API DTOs shared across controllers

pub mod admin_dto;
pub mod event_dto;
pub mod paginated_response;
pub mod stats_dto;

use serde::Serialize;

/// Uniform JSON envelope for every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
