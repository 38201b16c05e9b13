//! User and session routes (merged under /api/v1)

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::api::controller::user::UserController;
use crate::app_state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(UserController::all))
        .route("/users/by-organization", get(UserController::by_organization))
        .route("/users/profile", get(UserController::profile))
        .route("/users/create", post(UserController::create))
        .route("/users/update/{id}", patch(UserController::update))
        .route(
            "/users/switch-organization",
            post(UserController::switch_organization),
        )
        .route("/users/login", post(UserController::login))
        .route("/users/logout", post(UserController::logout))
}
