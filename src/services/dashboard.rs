//! Dashboard service
//!
//! Fetches the asset, work order and booking snapshots and hands them to the
//! pure KPI reducer with the current time.

use chrono::Utc;

use crate::{
    config::KpiConfig,
    error::AppResult,
    metrics::{self, DashboardKpis},
    repository::Repository,
};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
    config: KpiConfig,
}

impl DashboardService {
    pub fn new(repository: Repository, config: KpiConfig) -> Self {
        Self { repository, config }
    }

    pub async fn kpis(&self) -> AppResult<DashboardKpis> {
        let assets = self.repository.assets.list().await?;
        let work_orders = self.repository.work_orders.list().await?;
        let bookings = self.repository.bookings.list().await?;

        Ok(metrics::compute(
            &assets,
            &work_orders,
            &bookings,
            Utc::now(),
            &self.config,
        ))
    }
}
