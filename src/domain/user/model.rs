use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "SUPER_ADMIN")]
    SuperAdmin,
    #[serde(rename = "ORG_ADMIN")]
    OrgAdmin,
    #[serde(rename = "USER")]
    User,
}

/// The authenticated caller, as reported by the upstream session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub role: Role,
    #[serde(default)]
    pub organization_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub organization_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}
