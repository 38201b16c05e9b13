use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tracing::info;
use validator::Validate;

use crate::api::dto::admin_dto::{OrganizationUpsertRequest, VenueUpsertRequest};
use crate::core::client::UpstreamClient;
use crate::domain::directory::model::{Organization, Venue};
use crate::errors::AppError;

pub struct DirectoryService {
    client: Arc<UpstreamClient>,
}

impl DirectoryService {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }

    pub async fn venues(&self, session: Option<&str>) -> Result<Vec<Venue>> {
        self.client.venues(session).await
    }

    pub async fn create_venue(
        &self,
        session: Option<&str>,
        req: VenueUpsertRequest,
    ) -> Result<Value> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        require_name(req.name.as_deref())?;

        let body = self.client.create_venue(session, &req).await?;
        info!(name = req.name.as_deref(), "venue created");
        Ok(body)
    }

    pub async fn update_venue(
        &self,
        session: Option<&str>,
        id: i64,
        req: VenueUpsertRequest,
    ) -> Result<Value> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        self.client.update_venue(session, id, &req).await
    }

    pub async fn organizations(&self, session: Option<&str>) -> Result<Vec<Organization>> {
        let mut orgs = self.client.organizations(session).await?;
        fill_display_names(&mut orgs);
        Ok(orgs)
    }

    pub async fn create_organization(
        &self,
        session: Option<&str>,
        req: OrganizationUpsertRequest,
    ) -> Result<Value> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        require_name(req.name.as_deref())?;

        let body = self.client.create_organization(session, &req).await?;
        info!(name = req.name.as_deref(), "organization created");
        Ok(body)
    }

    pub async fn update_organization(
        &self,
        session: Option<&str>,
        id: i64,
        req: OrganizationUpsertRequest,
    ) -> Result<Value> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        self.client.update_organization(session, id, &req).await
    }
}

/// Listings always carry a usable display name, so no client needs to
/// reimplement the fallback to the internal name.
fn fill_display_names(orgs: &mut [Organization]) {
    for org in orgs {
        org.display_name = Some(org.label().to_string());
    }
}

/// Updates may omit the name; creates may not.
fn require_name(name: Option<&str>) -> Result<(), AppError> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(()),
        _ => Err(AppError::BodyParsingError(
            "name is required".to_string(),
        )),
    }
}
