use anyhow::Result;
use reqwest::Method;
use serde_json::Value;

use crate::api::dto::admin_dto::{OrganizationUpsertRequest, VenueUpsertRequest};
use crate::core::client::UpstreamClient;
use crate::domain::directory::model::{Organization, Venue};

impl UpstreamClient {
    pub async fn venues(&self, session: Option<&str>) -> Result<Vec<Venue>> {
        self.get_json("/api/venues", session).await
    }

    pub async fn create_venue(
        &self,
        session: Option<&str>,
        payload: &VenueUpsertRequest,
    ) -> Result<Value> {
        self.send_json(Method::POST, "/api/venues/create", session, payload)
            .await
    }

    pub async fn update_venue(
        &self,
        session: Option<&str>,
        id: i64,
        payload: &VenueUpsertRequest,
    ) -> Result<Value> {
        self.send_json(Method::PATCH, &format!("/api/venues/update{id}"), session, payload)
            .await
    }

    pub async fn organizations(&self, session: Option<&str>) -> Result<Vec<Organization>> {
        self.get_json("/api/organizations", session).await
    }

    pub async fn create_organization(
        &self,
        session: Option<&str>,
        payload: &OrganizationUpsertRequest,
    ) -> Result<Value> {
        self.send_json(Method::POST, "/api/organizations/create", session, payload)
            .await
    }

    pub async fn update_organization(
        &self,
        session: Option<&str>,
        id: i64,
        payload: &OrganizationUpsertRequest,
    ) -> Result<Value> {
        self.send_json(
            Method::PATCH,
            &format!("/api/organizations/update{id}"),
            session,
            payload,
        )
        .await
    }
}
