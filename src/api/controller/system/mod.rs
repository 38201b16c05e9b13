//! System controller: service identity and liveness

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::api::dto::ApiResponse;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct SystemController;

impl SystemController {
    pub async fn status(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        Ok(Json(ApiResponse::ok(json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "upstream_url": state.config.upstream_url,
            "venue_tz": state.config.venue_tz.name(),
        }))))
    }

    pub async fn health() -> Result<Json<ApiResponse<Value>>, AppError> {
        Ok(Json(ApiResponse::ok(json!({ "status": "ok" }))))
    }
}
