//! Shared domain taxonomies
//!
//! Labels follow the wire surface of the original application exactly
//! ("In Progress", "Offline - Unplanned", lowercase booking statuses), both
//! in JSON and in the Postgres enum types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Operational state of a physical asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "asset_status")]
pub enum AssetStatus {
    Online,
    Maintenance,
    #[serde(rename = "Offline - Planned")]
    #[sqlx(rename = "Offline - Planned")]
    OfflinePlanned,
    #[serde(rename = "Offline - Unplanned")]
    #[sqlx(rename = "Offline - Unplanned")]
    OfflineUnplanned,
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssetStatus::Online => "Online",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::OfflinePlanned => "Offline - Planned",
            AssetStatus::OfflineUnplanned => "Offline - Unplanned",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// WorkOrderType
// ---------------------------------------------------------------------------

/// Maintenance task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "work_order_type")]
pub enum WorkOrderType {
    Reactive,
    Preventive,
    Corrective,
    Inspection,
    Improvement,
    Project,
    Safety,
    Other,
}

// ---------------------------------------------------------------------------
// WorkOrderStatus
// ---------------------------------------------------------------------------

/// Work order lifecycle state
///
/// Implicit lifecycle: Requested → Approved → Assigned → In Progress →
/// {On Hold ⇄ In Progress} → Completed → Closed, with Cancelled reachable
/// from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "work_order_status")]
pub enum WorkOrderStatus {
    Requested,
    Approved,
    Assigned,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Hold")]
    #[sqlx(rename = "On Hold")]
    OnHold,
    Completed,
    Closed,
    Cancelled,
}

impl WorkOrderStatus {
    /// Whether the work order still counts as open for dashboard purposes
    pub fn is_open(self) -> bool {
        matches!(
            self,
            WorkOrderStatus::Requested
                | WorkOrderStatus::Approved
                | WorkOrderStatus::Assigned
                | WorkOrderStatus::InProgress
                | WorkOrderStatus::OnHold
        )
    }

    /// Whether the work order has left the open set
    pub fn is_closed(self) -> bool {
        !self.is_open()
    }
}

// ---------------------------------------------------------------------------
// WorkOrderPriority
// ---------------------------------------------------------------------------

/// Work order priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "work_order_priority")]
pub enum WorkOrderPriority {
    Critical,
    High,
    Medium,
    Low,
}

// ---------------------------------------------------------------------------
// FailureCode
// ---------------------------------------------------------------------------

/// Failure problem/cause/remedy classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "failure_code")]
pub enum FailureCode {
    #[serde(rename = "NA")]
    #[sqlx(rename = "NA")]
    NotApplicable,
    Mechanical,
    Electrical,
    Operational,
    Wear,
    Damage,
    Other,
}

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Tool booking state: created pending, then approved or rejected.
/// Rejected bookings stay on record but are excluded from overlap checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::str::FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            "rejected" => Ok(BookingStatus::Rejected),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
        };
        write!(f, "{}", label)
    }
}
