//! Event and dinner routes (e.g., /api/v1/events/*, /api/v1/dinners/*)

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::api::controller::event::EventController;
use crate::app_state::AppState;

pub fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/upcoming", get(EventController::upcoming))
        .route("/past", get(EventController::past))
        .route("/past/cohost", get(EventController::past_cohost))
        .route("/create", post(EventController::create))
        .route("/update/{id}", put(EventController::update))
        .route("/delete/{id}", delete(EventController::delete))
}

pub fn dinner_routes() -> Router<AppState> {
    Router::new().route("/create", post(EventController::create_dinner))
}
