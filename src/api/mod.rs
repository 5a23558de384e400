//! API handlers for Mainstay REST endpoints

pub mod assets;
pub mod bookings;
pub mod dashboard;
pub mod health;
pub mod openapi;
pub mod tools;
pub mod work_orders;
