use std::sync::Arc;

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::client::upstream::UpstreamClient;
use crate::domain::directory::service::DirectoryService;
use crate::domain::event::service::EventService;
use crate::domain::monitor::service::MonitorService;
use crate::domain::stats::service::StatsService;
use crate::domain::user::service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub event_service: Arc<EventService>,
    pub stats_service: Arc<StatsService<UpstreamClient>>,
    pub directory_service: Arc<DirectoryService>,
    pub user_service: Arc<UserService>,
    pub monitor_service: Arc<MonitorService>,
}

/// Wire every service to one shared upstream client.
pub fn build_app_state(config: AppConfig) -> Result<AppState> {
    let config = Arc::new(config);
    let client = Arc::new(UpstreamClient::new(&config)?);

    Ok(AppState {
        event_service: Arc::new(EventService::new(client.clone(), config.venue_tz)),
        stats_service: Arc::new(StatsService::new(client.clone(), config.venue_tz)),
        directory_service: Arc::new(DirectoryService::new(client.clone())),
        user_service: Arc::new(UserService::new(client.clone())),
        monitor_service: Arc::new(MonitorService::new(client)),
        config,
    })
}
