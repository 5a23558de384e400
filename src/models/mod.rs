//! Domain models

pub mod asset;
pub mod booking;
pub mod enums;
pub mod tool;
pub mod work_order;
