use anyhow::Result;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::{internal_error, AppError};

/// Recover a typed AppError from the service layer; anything else is internal.
/// Keeps 401/403/404 from the upstream intact across the anyhow boundary.
pub fn into_app_error(err: anyhow::Error) -> AppError {
    match err.downcast::<AppError>() {
        Ok(app) => app,
        Err(other) => internal_error(format!("{other:#}")),
    }
}

pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => Err(into_app_error(err)),
    }
}
