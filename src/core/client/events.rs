use anyhow::Result;
use reqwest::Method;
use serde_json::Value;

use crate::api::dto::event_dto::{DinnerCreateRequest, EventCreateRequest, EventUpdateRequest};
use crate::api::dto::paginated_response::UpstreamPage;
use crate::core::client::UpstreamClient;
use crate::domain::event::model::{CreatedEvent, Event};

impl UpstreamClient {
    pub async fn upcoming_events(&self, session: Option<&str>) -> Result<Vec<Event>> {
        self.get_json("/api/events/getUpcoming", session).await
    }

    pub async fn past_events(
        &self,
        session: Option<&str>,
        limit: u64,
        cursor: Option<u64>,
    ) -> Result<UpstreamPage<Event>> {
        self.get_json(&paged_path("/api/events/getPast", limit, cursor), session)
            .await
    }

    pub async fn past_cohost_events(
        &self,
        session: Option<&str>,
        limit: u64,
        cursor: Option<u64>,
    ) -> Result<UpstreamPage<Event>> {
        self.get_json(&paged_path("/api/events/getPastCohost", limit, cursor), session)
            .await
    }

    pub async fn create_event(
        &self,
        session: Option<&str>,
        payload: &EventCreateRequest,
    ) -> Result<CreatedEvent> {
        self.send_json(Method::POST, "/api/events/create", session, payload)
            .await
    }

    // Upstream route concatenates the id without a slash.
    pub async fn update_event(
        &self,
        session: Option<&str>,
        id: i64,
        payload: &EventUpdateRequest,
    ) -> Result<Value> {
        self.send_json(Method::PUT, &format!("/api/events/update{id}"), session, payload)
            .await
    }

    pub async fn delete_event(&self, session: Option<&str>, id: i64) -> Result<Value> {
        self.delete_json(&format!("/api/events/delete{id}"), session)
            .await
    }

    pub async fn create_dinner(
        &self,
        session: Option<&str>,
        payload: &DinnerCreateRequest,
    ) -> Result<CreatedEvent> {
        self.send_json(Method::POST, "/api/dinners/create", session, payload)
            .await
    }
}

fn paged_path(base: &str, limit: u64, cursor: Option<u64>) -> String {
    match cursor {
        Some(c) => format!("{base}?limit={limit}&cursor={c}"),
        None => format!("{base}?limit={limit}"),
    }
}
