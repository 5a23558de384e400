//! Tool booking service
//!
//! Owns the booking request rules: required fields, interval sanity, the
//! configurable minimum duration, and the non-overlap invariant (enforced
//! atomically in the repository). Also owns the pending → approved/rejected
//! status transitions with approver attribution.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::{
        booking::{CreateBooking, ToolBooking, UpdateBookingStatus},
        enums::BookingStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    config: BookingConfig,
}

impl BookingsService {
    pub fn new(repository: Repository, config: BookingConfig) -> Self {
        Self { repository, config }
    }

    /// List all bookings ordered by start time
    pub async fn list(&self) -> AppResult<Vec<ToolBooking>> {
        self.repository.bookings.list().await
    }

    /// Request a booking. New bookings always start `pending` with no
    /// approver; a conflicting non-rejected booking on the same tool makes
    /// the request fail with a conflict naming the existing booking.
    pub async fn request(&self, request: CreateBooking) -> AppResult<ToolBooking> {
        let missing = missing_fields(&request);
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let CreateBooking {
            tool_id: Some(tool_id),
            requested_by: Some(requested_by),
            start_time: Some(start_time),
            end_time: Some(end_time),
            notes,
        } = request
        else {
            return Err(AppError::Validation(
                "Missing one or more required fields".to_string(),
            ));
        };

        validate_interval(
            start_time,
            end_time,
            Duration::minutes(self.config.min_duration_minutes),
        )?;

        let booking = ToolBooking {
            id: format!("book-{}", Uuid::new_v4()),
            tool_id,
            requested_by,
            start_time,
            end_time,
            status: BookingStatus::Pending,
            approved_by: None,
            notes,
        };

        self.repository.bookings.create_if_free(&booking).await
    }

    /// Transition a booking's status.
    ///
    /// Approval requires an approver name; any other target status clears
    /// the approver, so reversing an approval also drops its attribution.
    pub async fn update_status(
        &self,
        booking_id: &str,
        update: UpdateBookingStatus,
    ) -> AppResult<ToolBooking> {
        let status = update
            .status
            .as_deref()
            .and_then(|s| s.parse::<BookingStatus>().ok())
            .ok_or_else(|| {
                AppError::Validation(
                    "Invalid status provided. Must be one of: pending, approved, rejected"
                        .to_string(),
                )
            })?;

        let approved_by = match status {
            BookingStatus::Approved => {
                let name = update
                    .approved_by
                    .filter(|n| !n.trim().is_empty())
                    .ok_or_else(|| {
                        AppError::Validation(
                            "approvedBy is required when status is approved".to_string(),
                        )
                    })?;
                Some(name)
            }
            // Clearing on pending/rejected is intentional: attribution must
            // not survive a reversed approval
            _ => None,
        };

        self.repository
            .bookings
            .update_status(booking_id, status, approved_by.as_deref())
            .await
    }
}

fn missing_fields(request: &CreateBooking) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if request.tool_id.as_deref().map_or(true, |s| s.trim().is_empty()) {
        missing.push("toolId");
    }
    if request.requested_by.as_deref().map_or(true, |s| s.trim().is_empty()) {
        missing.push("requestedBy");
    }
    if request.start_time.is_none() {
        missing.push("startTime");
    }
    if request.end_time.is_none() {
        missing.push("endTime");
    }
    missing
}

fn validate_interval(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    min_duration: Duration,
) -> AppResult<()> {
    if end <= start {
        return Err(AppError::Validation(
            "End time must be after start time".to_string(),
        ));
    }
    if end - start < min_duration {
        return Err(AppError::Validation(format!(
            "Booking duration must be at least {} minutes",
            min_duration.num_minutes()
        )));
    }
    Ok(())
}
