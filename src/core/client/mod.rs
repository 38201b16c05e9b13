//! HTTP client for the upstream pubquery API

pub mod upstream;

pub mod directory;
pub mod events;
pub mod monitor;
pub mod stats;
pub mod users;

pub use upstream::UpstreamClient;
