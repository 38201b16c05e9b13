//! Venue, organization and user administration DTOs
//!
//! Create and update share one partial shape per entity; the services enforce
//! the fields a create cannot omit.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::user::model::Role;

#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct VenueUpsertRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub maps_link: Option<String>,
}

#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct OrganizationUpsertRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub venue_id: Option<i64>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub fb_page: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct UserUpsertRequest {
    #[validate(length(min = 1, message = "username must not be empty"))]
    pub username: Option<String>,
    #[validate(email(message = "invalid email format"))]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub password: Option<String>,
}

/// The active organization on the caller's session.
#[derive(Deserialize, Serialize, Debug)]
pub struct SwitchOrganizationRequest {
    pub organization_id: i64,
}

#[derive(Deserialize, Serialize, Validate, Debug)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}
