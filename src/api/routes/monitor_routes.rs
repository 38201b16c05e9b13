//! Scraper monitor routes (e.g., /api/v1/admin/monitor/*)

use axum::{routing::get, Router};

use crate::api::controller::monitor::MonitorController;
use crate::app_state::AppState;

pub fn monitor_routes() -> Router<AppState> {
    Router::new()
        .route("/counters", get(MonitorController::counters))
        .route("/logs", get(MonitorController::audit_logs))
}
