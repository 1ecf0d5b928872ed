pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod icons;
pub mod models;
pub mod routes;
pub mod telemetry;
pub mod validation;
pub mod views;

pub use app::{router, AppState};
pub use config::Config;
