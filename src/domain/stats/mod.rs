pub mod model;
pub mod series;
pub mod service;
pub mod timeparse;
pub mod window;
