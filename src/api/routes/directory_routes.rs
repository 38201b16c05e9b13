//! Venue and organization directory routes (merged under /api/v1)

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::api::controller::directory::DirectoryController;
use crate::app_state::AppState;

pub fn directory_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(DirectoryController::venues))
        .route("/venues/create", post(DirectoryController::create_venue))
        .route("/venues/update/{id}", patch(DirectoryController::update_venue))
        .route("/organizations", get(DirectoryController::organizations))
        .route(
            "/organizations/create",
            post(DirectoryController::create_organization),
        )
        .route(
            "/organizations/update/{id}",
            patch(DirectoryController::update_organization),
        )
}
