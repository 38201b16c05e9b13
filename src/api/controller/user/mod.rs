use axum::extract::{Path, State};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::header::SET_COOKIE;
use serde_json::Value;

use crate::api::dto::admin_dto::{LoginRequest, SwitchOrganizationRequest, UserUpsertRequest};
use crate::api::dto::ApiResponse;
use crate::api::util::json::{into_app_error, to_json};
use crate::api::util::session::Session;
use crate::app_state::AppState;
use crate::domain::user::model::{Profile, User};
use crate::errors::AppError;

pub struct UserController;

impl UserController {
    pub async fn profile(
        State(state): State<AppState>,
        session: Session,
    ) -> Result<Json<ApiResponse<Profile>>, AppError> {
        to_json(state.user_service.profile(session.as_deref()).await)
    }

    pub async fn all(
        State(state): State<AppState>,
        session: Session,
    ) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
        to_json(state.user_service.all(session.as_deref()).await)
    }

    pub async fn by_organization(
        State(state): State<AppState>,
        session: Session,
    ) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
        to_json(state.user_service.by_organization(session.as_deref()).await)
    }

    pub async fn create(
        State(state): State<AppState>,
        session: Session,
        Json(req): Json<UserUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.user_service.create(session.as_deref(), req).await)
    }

    pub async fn update(
        State(state): State<AppState>,
        session: Session,
        Path(id): Path<i64>,
        Json(req): Json<UserUpsertRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.user_service.update(session.as_deref(), id, req).await)
    }

    pub async fn switch_organization(
        State(state): State<AppState>,
        session: Session,
        Json(req): Json<SwitchOrganizationRequest>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(
            state
                .user_service
                .switch_organization(session.as_deref(), req)
                .await,
        )
    }

    /// Proxies the login and relays the upstream session cookie to the browser.
    pub async fn login(
        State(state): State<AppState>,
        Json(req): Json<LoginRequest>,
    ) -> Result<Response, AppError> {
        let (body, cookies) = state
            .user_service
            .login(req)
            .await
            .map_err(into_app_error)?;
        Ok(with_cookies(body, cookies))
    }

    pub async fn logout(
        State(state): State<AppState>,
        session: Session,
    ) -> Result<Response, AppError> {
        let (body, cookies) = state
            .user_service
            .logout(session.as_deref())
            .await
            .map_err(into_app_error)?;
        Ok(with_cookies(body, cookies))
    }
}

fn with_cookies(body: Value, cookies: Vec<String>) -> Response {
    let mut response = Json(ApiResponse::ok(body)).into_response();
    for cookie in cookies {
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    response
}
