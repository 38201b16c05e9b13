use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use serde_json::Value;
use tracing::info;
use validator::Validate;

use crate::api::dto::event_dto::{
    CursorQuery, DinnerCreateRequest, EventCreateRequest, EventUpdateRequest,
};
use crate::api::dto::paginated_response::CursorPage;
use crate::core::client::UpstreamClient;
use crate::domain::event::model::Event;
use crate::errors::AppError;

/// Page size the history views load per "load more" click.
pub const PAGE_LIMIT: u64 = 10;

pub struct EventService {
    client: Arc<UpstreamClient>,
    venue_tz: Tz,
}

impl EventService {
    pub fn new(client: Arc<UpstreamClient>, venue_tz: Tz) -> Self {
        Self { client, venue_tz }
    }

    pub async fn upcoming(&self, session: Option<&str>) -> Result<Vec<Event>> {
        let mut events = self.client.upcoming_events(session).await?;
        for event in &mut events {
            normalize_links(event);
        }
        Ok(events)
    }

    pub async fn past(&self, session: Option<&str>, q: CursorQuery) -> Result<CursorPage<Event>> {
        let limit = q.limit_or(PAGE_LIMIT);
        let page = self.client.past_events(session, limit, q.cursor).await?;
        let mut page = page.normalize(q.cursor.unwrap_or(0), limit);
        for event in &mut page.items {
            normalize_links(event);
        }
        Ok(page)
    }

    pub async fn past_cohost(
        &self,
        session: Option<&str>,
        q: CursorQuery,
    ) -> Result<CursorPage<Event>> {
        let limit = q.limit_or(PAGE_LIMIT);
        let page = self
            .client
            .past_cohost_events(session, limit, q.cursor)
            .await?;
        let mut page = page.normalize(q.cursor.unwrap_or(0), limit);
        for event in &mut page.items {
            normalize_links(event);
        }
        Ok(page)
    }

    pub async fn create(&self, session: Option<&str>, req: EventCreateRequest) -> Result<Event> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        self.reject_past_date(&req.date)?;

        let created = self.client.create_event(session, &req).await?;
        info!(event_id = created.event.id, "event created");
        Ok(created.event)
    }

    pub async fn update(
        &self,
        session: Option<&str>,
        id: i64,
        req: EventUpdateRequest,
    ) -> Result<Value> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        self.client.update_event(session, id, &req).await
    }

    pub async fn delete(&self, session: Option<&str>, id: i64) -> Result<Value> {
        let body = self.client.delete_event(session, id).await?;
        info!(event_id = id, "event deleted");
        Ok(body)
    }

    pub async fn create_dinner(
        &self,
        session: Option<&str>,
        req: DinnerCreateRequest,
    ) -> Result<Event> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        self.reject_past_date(&req.date)?;

        let created = self.client.create_dinner(session, &req).await?;
        info!(event_id = created.event.id, "dinner created");
        Ok(created.event)
    }

    /// New events must fall on today or later in the venue's timezone.
    fn reject_past_date(&self, date: &chrono::DateTime<Utc>) -> Result<(), AppError> {
        let today = Utc::now().with_timezone(&self.venue_tz).date_naive();
        let event_day = date.with_timezone(&self.venue_tz).date_naive();
        if event_day < today {
            return Err(AppError::BodyParsingError(
                "date must not be in the past".to_string(),
            ));
        }
        Ok(())
    }
}

/// NULL links become "" in the model; whitespace-only ones flatten here.
fn normalize_links(event: &mut Event) {
    if event.fb_link.trim().is_empty() {
        event.fb_link = String::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Duration, TimeZone};

    fn service() -> EventService {
        let config = crate::config::AppConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            upstream_url: "http://localhost:9".to_string(),
            upstream_timeout_secs: 1,
            venue_tz: chrono_tz::Europe::Stockholm,
        };
        EventService::new(
            Arc::new(UpstreamClient::new(&config).unwrap()),
            config.venue_tz,
        )
    }

    #[test]
    fn rejects_yesterday_accepts_tomorrow() {
        let svc = service();

        let yesterday = Utc::now() - Duration::days(2);
        assert!(svc.reject_past_date(&yesterday).is_err());

        let tomorrow = Utc::now() + Duration::days(2);
        assert!(svc.reject_past_date(&tomorrow).is_ok());
    }

    #[test]
    fn past_date_check_uses_venue_local_day() {
        let svc = service();

        // 23:30 UTC is already the next day in Stockholm; a date that is
        // "yesterday" in UTC but "today" locally must pass.
        let now_local = Utc::now().with_timezone(&chrono_tz::Europe::Stockholm);
        let today_local_noon = chrono_tz::Europe::Stockholm
            .with_ymd_and_hms(
                now_local.date_naive().year(),
                now_local.date_naive().month(),
                now_local.date_naive().day(),
                12,
                0,
                0,
            )
            .single()
            .unwrap()
            .with_timezone(&Utc);
        assert!(svc.reject_past_date(&today_local_noon).is_ok());
    }

    #[test]
    fn blank_fb_link_normalizes_to_empty() {
        let mut event = Event {
            id: 1,
            title: "Pub".into(),
            date: "2024-05-01T18:00:00Z".into(),
            auto_created: false,
            fb_link: "   ".into(),
            venue_id: 1,
            description: String::new(),
            patches: false,
            co_host_organization_id: None,
            cohost_display_name: None,
        };
        normalize_links(&mut event);
        assert_eq!(event.fb_link, "");
    }
}
