use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Area subrouters live under /api/v1
    let api_v1 = Router::new()
        .nest("/events", crate::api::routes::event_routes::event_routes())
        .nest("/dinners", crate::api::routes::event_routes::dinner_routes())
        .nest("/stats", crate::api::routes::stats_routes::stats_routes())
        .nest(
            "/admin/monitor",
            crate::api::routes::monitor_routes::monitor_routes(),
        )
        .nest("/system", crate::api::routes::system_routes::system_routes())
        .merge(crate::api::routes::directory_routes::directory_routes())
        .merge(crate::api::routes::user_routes::user_routes());

    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // API v1
        .nest("/api/v1", api_v1)
        // Fallback handler for 404
        .fallback(handler_404)
        // CORS for the browser dashboard
        .layer(CorsLayer::very_permissive())
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
