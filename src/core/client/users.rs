use anyhow::{anyhow, Result};
use reqwest::Method;
use serde_json::Value;

use crate::api::dto::admin_dto::{LoginRequest, SwitchOrganizationRequest, UserUpsertRequest};
use crate::core::client::upstream::decode;
use crate::core::client::UpstreamClient;
use crate::domain::user::model::{Profile, User};

impl UpstreamClient {
    pub async fn profile(&self, session: Option<&str>) -> Result<Profile> {
        self.get_json("/api/users/profile", session).await
    }

    pub async fn users(&self, session: Option<&str>) -> Result<Vec<User>> {
        self.get_json("/api/users/getAll", session).await
    }

    pub async fn users_by_organization(&self, session: Option<&str>) -> Result<Vec<User>> {
        self.get_json("/api/users/getAllbyOrganization", session).await
    }

    pub async fn create_user(
        &self,
        session: Option<&str>,
        payload: &UserUpsertRequest,
    ) -> Result<Value> {
        self.send_json(Method::POST, "/api/users/create", session, payload)
            .await
    }

    pub async fn update_user(
        &self,
        session: Option<&str>,
        id: i64,
        payload: &UserUpsertRequest,
    ) -> Result<Value> {
        self.send_json(Method::PATCH, &format!("/api/users/update{id}"), session, payload)
            .await
    }

    pub async fn switch_organization(
        &self,
        session: Option<&str>,
        payload: &SwitchOrganizationRequest,
    ) -> Result<Value> {
        self.send_json(
            Method::POST,
            "/api/users/switch-organization",
            session,
            payload,
        )
        .await
    }

    /// Log in against the upstream, returning the response body together
    /// with any `Set-Cookie` headers so the dashboard can relay the session
    /// to the browser.
    pub async fn login(&self, payload: &LoginRequest) -> Result<(Value, Vec<String>)> {
        let resp = self
            .request(Method::POST, "/api/users/login", None)
            .json(payload)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call upstream POST /api/users/login: {}", e))?;

        let cookies = set_cookies(&resp);
        let body = decode("/api/users/login", resp).await?;
        Ok((body, cookies))
    }

    pub async fn logout(&self, session: Option<&str>) -> Result<(Value, Vec<String>)> {
        let resp = self
            .request(Method::POST, "/api/users/logout", session)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call upstream POST /api/users/logout: {}", e))?;

        let cookies = set_cookies(&resp);
        let body = decode("/api/users/logout", resp).await?;
        Ok((body, cookies))
    }
}

fn set_cookies(resp: &reqwest::Response) -> Vec<String> {
    resp.headers()
        .get_all(http::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}
