pub mod common;
pub mod directory;
pub mod event;
pub mod monitor;
pub mod stats;
pub mod user;
