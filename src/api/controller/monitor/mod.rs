//! Super-admin monitor endpoints: live counter board and audit trail

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;

use crate::api::dto::event_dto::CursorQuery;
use crate::api::dto::paginated_response::CursorPage;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::api::util::session::Session;
use crate::app_state::AppState;
use crate::domain::monitor::model::{AuditEntry, CounterStatusRow};
use crate::errors::AppError;

pub struct MonitorController;

impl MonitorController {
    pub async fn counters(
        State(state): State<AppState>,
        session: Session,
    ) -> Result<Json<ApiResponse<Vec<CounterStatusRow>>>, AppError> {
        to_json(
            state
                .monitor_service
                .counters(session.as_deref(), Utc::now())
                .await,
        )
    }

    pub async fn audit_logs(
        State(state): State<AppState>,
        session: Session,
        Query(q): Query<CursorQuery>,
    ) -> Result<Json<ApiResponse<CursorPage<AuditEntry>>>, AppError> {
        to_json(
            state
                .monitor_service
                .audit_logs(session.as_deref(), q)
                .await,
        )
    }
}
