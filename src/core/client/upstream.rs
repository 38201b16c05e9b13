use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Thin wrapper around a shared `reqwest::Client`, pointed at the remote
/// pubquery API. Callers pass the browser's session cookie through so the
/// upstream sees the original identity.
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            base_url: config.upstream_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn request(&self, method: Method, path: &str, session: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "upstream request");

        let mut builder = self
            .http
            .request(method, url)
            .header("X-Request-Id", Uuid::new_v4().to_string());

        if let Some(cookie) = session {
            builder = builder.header(http::header::COOKIE, cookie);
        }

        builder
    }

    /// GET a JSON payload.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&str>,
    ) -> Result<T> {
        let resp = self
            .request(Method::GET, path, session)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call upstream GET {}: {}", path, e))?;
        decode(path, resp).await
    }

    /// Send a JSON body with the given method and decode the JSON response.
    pub(crate) async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        session: Option<&str>,
        body: &B,
    ) -> Result<T> {
        let resp = self
            .request(method.clone(), path, session)
            .json(body)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call upstream {} {}: {}", method, path, e))?;
        decode(path, resp).await
    }

    /// DELETE without a body.
    pub(crate) async fn delete_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&str>,
    ) -> Result<T> {
        let resp = self
            .request(Method::DELETE, path, session)
            .send()
            .await
            .map_err(|e| anyhow!("Failed to call upstream DELETE {}: {}", path, e))?;
        decode(path, resp).await
    }
}

/// Decode an upstream response, mapping error statuses onto `AppError`
/// so controllers can surface them with the right status code.
pub(crate) async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let message = extract_message(resp).await;
        return Err(map_status(status, path, message).into());
    }

    resp.json()
        .await
        .map_err(|e| anyhow!("Failed to decode upstream response from {}: {}", path, e))
}

pub(crate) fn map_status(status: StatusCode, path: &str, message: String) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
        StatusCode::FORBIDDEN => AppError::Forbidden(message),
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        _ => AppError::UpstreamApiError(format!("{} returned {}: {}", path, status, message)),
    }
}

/// The upstream mixes `{"error": ..}`, `{"message": ..}` and plain-text
/// error bodies; pull out whichever is present.
pub(crate) async fn extract_message(resp: Response) -> String {
    let text = resp.text().await.unwrap_or_default();
    if let Ok(value) = serde_json::from_str::<Value>(&text) {
        if let Some(msg) = value.get("error").and_then(Value::as_str) {
            return msg.to_string();
        }
        if let Some(msg) = value.get("message").and_then(Value::as_str) {
            return msg.to_string();
        }
    }
    if text.is_empty() {
        "request failed".to_string()
    } else {
        text
    }
}
