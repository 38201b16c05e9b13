//! Venue and organization administration endpoints

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::api::dto::admin_dto::{OrganizationUpsertRequest, VenueUpsertRequest};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::api::util::session::Session;
use crate::app_state::AppState;
use crate::domain::directory::model::{Organization, Venue};
use crate::errors::AppError;

pub struct DirectoryController;

impl DirectoryController {
    pub async fn venues(
        State(state): State<AppState>,
        session: Session,
    ) -> Result<Json<ApiResponse<Vec<Venue>>>, AppError> {
        to_json(state.directory_service.venues(session.as_deref()).await)
    }

    pub async fn create_venue(
        State(state): State<AppState>,
        session: Session,
        Json(req): Json<VenueUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(
            state
                .directory_service
                .create_venue(session.as_deref(), req)
                .await,
        )
    }

    pub async fn update_venue(
        State(state): State<AppState>,
        session: Session,
        Path(id): Path<i64>,
        Json(req): Json<VenueUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(
            state
                .directory_service
                .update_venue(session.as_deref(), id, req)
                .await,
        )
    }

    pub async fn organizations(
        State(state): State<AppState>,
        session: Session,
    ) -> Result<Json<ApiResponse<Vec<Organization>>>, AppError> {
        to_json(
            state
                .directory_service
                .organizations(session.as_deref())
                .await,
        )
    }

    pub async fn create_organization(
        State(state): State<AppState>,
        session: Session,
        Json(req): Json<OrganizationUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(
            state
                .directory_service
                .create_organization(session.as_deref(), req)
                .await,
        )
    }

    pub async fn update_organization(
        State(state): State<AppState>,
        session: Session,
        Path(id): Path<i64>,
        Json(req): Json<OrganizationUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(
            state
                .directory_service
                .update_organization(session.as_deref(), id, req)
                .await,
        )
    }
}
