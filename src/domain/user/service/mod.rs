use std::sync::Arc;

use anyhow::Result;
use serde_json::Value;
use tracing::info;
use validator::Validate;

use crate::api::dto::admin_dto::{LoginRequest, SwitchOrganizationRequest, UserUpsertRequest};
use crate::core::client::UpstreamClient;
use crate::domain::user::model::{Profile, Role, User};
use crate::errors::AppError;

pub struct UserService {
    client: Arc<UpstreamClient>,
}

impl UserService {
    pub fn new(client: Arc<UpstreamClient>) -> Self {
        Self { client }
    }

    pub async fn profile(&self, session: Option<&str>) -> Result<Profile> {
        self.client.profile(session).await
    }

    pub async fn all(&self, session: Option<&str>) -> Result<Vec<User>> {
        self.client.users(session).await
    }

    pub async fn by_organization(&self, session: Option<&str>) -> Result<Vec<User>> {
        self.client.users_by_organization(session).await
    }

    pub async fn create(&self, session: Option<&str>, req: UserUpsertRequest) -> Result<Value> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;

        let profile = self.client.profile(session).await?;
        let req = scope_to_caller(&profile, req)?;

        let body = self.client.create_user(session, &req).await?;
        info!(username = req.username.as_deref(), "user created");
        Ok(body)
    }

    pub async fn update(
        &self,
        session: Option<&str>,
        id: i64,
        req: UserUpsertRequest,
    ) -> Result<Value> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;

        let profile = self.client.profile(session).await?;
        let req = scope_to_caller(&profile, req)?;

        self.client.update_user(session, id, &req).await
    }

    /// Change which organization the caller's session acts as. The upstream
    /// owns the permission check; this is a plain relay like the other
    /// session operations.
    pub async fn switch_organization(
        &self,
        session: Option<&str>,
        req: SwitchOrganizationRequest,
    ) -> Result<Value> {
        self.client.switch_organization(session, &req).await
    }

    pub async fn login(&self, req: LoginRequest) -> Result<(Value, Vec<String>)> {
        req.validate()
            .map_err(|e| AppError::BodyParsingError(e.to_string()))?;
        self.client.login(&req).await
    }

    pub async fn logout(&self, session: Option<&str>) -> Result<(Value, Vec<String>)> {
        self.client.logout(session).await
    }
}

/// Org admins may only manage users inside their own organization, so the
/// organization id on the payload is overwritten with theirs. Plain users
/// cannot manage accounts at all.
fn scope_to_caller(profile: &Profile, mut req: UserUpsertRequest) -> Result<UserUpsertRequest> {
    match profile.role {
        Role::SuperAdmin => Ok(req),
        Role::OrgAdmin => {
            req.organization_id = profile.organization_id;
            Ok(req)
        }
        Role::User => Err(AppError::Forbidden(
            "only admins may manage user accounts".to_string(),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(org: Option<i64>) -> UserUpsertRequest {
        UserUpsertRequest {
            username: Some("anna".into()),
            email: Some("anna@example.se".into()),
            role: Some(Role::User),
            organization_id: org,
            password: None,
        }
    }

    #[test]
    fn org_admin_writes_are_pinned_to_their_organization() {
        let profile = Profile {
            id: 7,
            role: Role::OrgAdmin,
            organization_id: Some(3),
        };
        let scoped = scope_to_caller(&profile, request(Some(99))).unwrap();
        assert_eq!(scoped.organization_id, Some(3));
    }

    #[test]
    fn super_admin_keeps_requested_organization() {
        let profile = Profile {
            id: 1,
            role: Role::SuperAdmin,
            organization_id: None,
        };
        let scoped = scope_to_caller(&profile, request(Some(99))).unwrap();
        assert_eq!(scoped.organization_id, Some(99));
    }

    #[test]
    fn plain_users_are_rejected() {
        let profile = Profile {
            id: 2,
            role: Role::User,
            organization_id: Some(3),
        };
        let err = scope_to_caller(&profile, request(None)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Forbidden(_))
        ));
    }
}
