use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::stats_dto::{ChartQuery, SnapshotRangeQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::api::util::session::Session;
use crate::app_state::AppState;
use crate::domain::stats::model::{ChartResponse, Snapshot};
use crate::errors::AppError;

pub struct StatsController;

impl StatsController {
    /// Raw snapshot rows for a venue and UTC range, unchanged.
    pub async fn snapshots(
        State(state): State<AppState>,
        session: Session,
        Query(q): Query<SnapshotRangeQuery>,
    ) -> Result<Json<ApiResponse<Vec<Snapshot>>>, AppError> {
        to_json(
            state
                .stats_service
                .snapshots(session.as_deref(), q.venue_id, q.from, q.to)
                .await,
        )
    }

    /// Chart-ready series for one event night.
    pub async fn chart(
        State(state): State<AppState>,
        session: Session,
        Query(q): Query<ChartQuery>,
    ) -> Result<Json<ApiResponse<Arc<ChartResponse>>>, AppError> {
        to_json(
            state
                .stats_service
                .chart(session.as_deref(), q.venue_id, q.start)
                .await,
        )
    }
}
