//! API route declarations (e.g., /api/v1/*)

pub mod event_routes;
pub mod stats_routes;
pub mod directory_routes;
pub mod user_routes;
pub mod monitor_routes;
pub mod system_routes;
