//! Business logic services

pub mod assets;
pub mod bookings;
pub mod dashboard;
pub mod tools;
pub mod work_orders;

use crate::{
    config::{BookingConfig, KpiConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub assets: assets::AssetsService,
    pub work_orders: work_orders::WorkOrdersService,
    pub tools: tools::ToolsService,
    pub bookings: bookings::BookingsService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, booking_config: BookingConfig, kpi_config: KpiConfig) -> Self {
        Self {
            assets: assets::AssetsService::new(repository.clone()),
            work_orders: work_orders::WorkOrdersService::new(repository.clone()),
            tools: tools::ToolsService::new(repository.clone()),
            bookings: bookings::BookingsService::new(repository.clone(), booking_config),
            dashboard: dashboard::DashboardService::new(repository, kpi_config),
        }
    }
}
