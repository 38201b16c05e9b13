//! Venue statistics routes (e.g., /api/v1/stats/*)

use axum::{routing::get, Router};

use crate::api::controller::stats::StatsController;
use crate::app_state::AppState;

pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/snapshots", get(StatsController::snapshots))
        .route("/chart", get(StatsController::chart))
}
