use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::event_dto::{
    CursorQuery, DinnerCreateRequest, EventCreateRequest, EventUpdateRequest,
};
use crate::api::dto::paginated_response::CursorPage;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::api::util::session::Session;
use crate::app_state::AppState;
use crate::domain::event::model::Event;
use crate::errors::AppError;

pub struct EventController;

impl EventController {
    pub async fn upcoming(
        State(state): State<AppState>,
        session: Session,
    ) -> Result<Json<ApiResponse<Vec<Event>>>, AppError> {
        to_json(state.event_service.upcoming(session.as_deref()).await)
    }

    pub async fn past(
        State(state): State<AppState>,
        session: Session,
        Query(q): Query<CursorQuery>,
    ) -> Result<Json<ApiResponse<CursorPage<Event>>>, AppError> {
        to_json(state.event_service.past(session.as_deref(), q).await)
    }

    pub async fn past_cohost(
        State(state): State<AppState>,
        session: Session,
        Query(q): Query<CursorQuery>,
    ) -> Result<Json<ApiResponse<CursorPage<Event>>>, AppError> {
        to_json(state.event_service.past_cohost(session.as_deref(), q).await)
    }

    pub async fn create(
        State(state): State<AppState>,
        session: Session,
        Json(req): Json<EventCreateRequest>,
    ) -> Result<Json<ApiResponse<Event>>, AppError> {
        to_json(state.event_service.create(session.as_deref(), req).await)
    }

    pub async fn update(
        State(state): State<AppState>,
        session: Session,
        Path(id): Path<i64>,
        Json(req): Json<EventUpdateRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.event_service.update(session.as_deref(), id, req).await)
    }

    pub async fn delete(
        State(state): State<AppState>,
        session: Session,
        Path(id): Path<i64>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.event_service.delete(session.as_deref(), id).await)
    }

    pub async fn create_dinner(
        State(state): State<AppState>,
        session: Session,
        Json(req): Json<DinnerCreateRequest>,
    ) -> Result<Json<ApiResponse<Event>>, AppError> {
        to_json(
            state
                .event_service
                .create_dinner(session.as_deref(), req)
                .await,
        )
    }
}
