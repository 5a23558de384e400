//! Tool booking model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::BookingStatus;

/// Reservation of one tool for a half-open interval `[start_time, end_time)`.
///
/// Invariant: `approved_by` is set if and only if `status` is approved, and
/// no two non-rejected bookings for the same tool overlap.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolBooking {
    /// Generated identifier (`book-<uuid>`)
    pub id: String,
    pub tool_id: String,
    pub requested_by: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ToolBooking {
    /// Whether a request for `[start, end)` on `tool_id` conflicts with this
    /// booking. Rejected bookings never conflict; touching intervals
    /// (end == other start) do not conflict either, the comparison is strict.
    pub fn conflicts_with(
        &self,
        tool_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> bool {
        self.tool_id == tool_id
            && self.status != BookingStatus::Rejected
            && start < self.end_time
            && end > self.start_time
    }
}

/// Booking request payload
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub tool_id: Option<String>,
    pub requested_by: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

/// Booking status update payload. `status` is kept as a raw string so an
/// unknown value surfaces as a validation error naming the allowed set.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatus {
    pub status: Option<String>,
    pub approved_by: Option<String>,
}
