//! Repository layer for database operations
//!
//! The `Repository` owns the connection pool and is injected into every
//! service at startup; no handler touches a database handle directly.

pub mod assets;
pub mod bookings;
pub mod tools;
pub mod work_orders;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub assets: assets::AssetsRepository,
    pub work_orders: work_orders::WorkOrdersRepository,
    pub tools: tools::ToolsRepository,
    pub bookings: bookings::BookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            assets: assets::AssetsRepository::new(pool.clone()),
            work_orders: work_orders::WorkOrdersRepository::new(pool.clone()),
            tools: tools::ToolsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            pool,
        }
    }
}
