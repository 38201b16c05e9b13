use std::env;

use anyhow::{anyhow, Result};
use chrono_tz::Tz;

/// Runtime configuration, read once at startup from the environment
/// (optionally via a `.env` file).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the dashboard API binds to.
    pub bind_addr: String,
    /// Base URL of the remote pubquery API.
    pub upstream_url: String,
    /// Per-request timeout against the upstream, in seconds.
    pub upstream_timeout_secs: u64,
    /// Timezone used for the night window and hour-of-day statistics.
    pub venue_tz: Tz,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr =
            env::var("PUBQUERY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let upstream_url = env::var("PUBQUERY_UPSTREAM_URL")
            .unwrap_or_else(|_| "https://api.pubquery.se".to_string());

        let upstream_timeout_secs = env::var("PUBQUERY_UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15);

        let tz_name =
            env::var("PUBQUERY_VENUE_TZ").unwrap_or_else(|_| "Europe/Stockholm".to_string());
        let venue_tz = tz_name
            .parse::<Tz>()
            .map_err(|e| anyhow!("Invalid PUBQUERY_VENUE_TZ {:?}: {}", tz_name, e))?;

        Ok(Self {
            bind_addr,
            upstream_url,
            upstream_timeout_secs,
            venue_tz,
        })
    }
}
