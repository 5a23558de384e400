//! Mainstay Maintenance Management System
//!
//! A Rust REST server for maintenance management: an asset registry, a
//! work order lifecycle, a tool catalog with conflict-checked bookings,
//! and a dashboard KPI reducer over the live data.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
