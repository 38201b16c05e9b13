use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub maps_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: i64,
    pub name: String,
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

impl Organization {
    /// Name to show in listings; falls back to the internal name.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.name)
    }
}
