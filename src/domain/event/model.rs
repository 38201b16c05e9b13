use serde::{Deserialize, Serialize};

use crate::domain::common::de::{bool_from_int, string_or_empty};

/// A pub night or dinner as the upstream returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    /// UTC timestamp string, sometimes without an explicit offset.
    pub date: String,
    #[serde(default, deserialize_with = "bool_from_int")]
    pub auto_created: bool,
    /// Stored as NULL upstream when absent; normalized to "".
    #[serde(default, deserialize_with = "string_or_empty")]
    pub fb_link: String,
    pub venue_id: i64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "bool_from_int")]
    pub patches: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_host_organization_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohost_display_name: Option<String>,
}

/// Create endpoints wrap the new row in an `event` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedEvent {
    pub event: Event,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_text_columns_deserialize_to_empty_strings() {
        let rows: Vec<Event> = serde_json::from_str(
            r#"[{
                "id": 1,
                "title": "Pub night",
                "date": "2024-05-01 18:00:00",
                "auto_created": 0,
                "fb_link": null,
                "venue_id": 2,
                "description": null,
                "patches": false
            }]"#,
        )
        .unwrap();
        assert_eq!(rows[0].fb_link, "");
        assert_eq!(rows[0].description, "");
    }
}
