use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use http::header::COOKIE;

use crate::errors::AppError;

/// The caller's session cookie, forwarded verbatim to the upstream API.
/// The dashboard talks to the upstream with `credentials: "include"`; this
/// service never inspects or stores the cookie itself.
#[derive(Debug, Clone, Default)]
pub struct Session(Option<String>);

impl Session {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookie = parts
            .headers
            .get(COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        Ok(Session(cookie))
    }
}
