//! Tool bookings repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{booking::ToolBooking, enums::BookingStatus},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all bookings ordered by start time
    pub async fn list(&self) -> AppResult<Vec<ToolBooking>> {
        let rows = sqlx::query_as::<_, ToolBooking>(
            "SELECT * FROM tool_bookings ORDER BY start_time ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a booking, atomically with the overlap check.
    ///
    /// The conflict probe and the insert run in one transaction holding a
    /// transaction-scoped advisory lock keyed by the tool id, so two
    /// concurrent requests for overlapping intervals on the same tool cannot
    /// both pass the probe. Requests for different tools do not contend.
    pub async fn create_if_free(&self, booking: &ToolBooking) -> AppResult<ToolBooking> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(&booking.tool_id)
            .execute(&mut *tx)
            .await?;

        let conflicting: Option<String> = sqlx::query_scalar(
            r#"
            SELECT id FROM tool_bookings
            WHERE tool_id = $1
              AND status <> 'rejected'
              AND start_time < $3
              AND end_time > $2
            ORDER BY start_time
            LIMIT 1
            "#,
        )
        .bind(&booking.tool_id)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(id) = conflicting {
            return Err(AppError::Conflict(format!(
                "Time slot conflicts with an existing booking (ID: {}) for this tool",
                id
            )));
        }

        let row = sqlx::query_as::<_, ToolBooking>(
            r#"
            INSERT INTO tool_bookings
                (id, tool_id, requested_by, start_time, end_time, status, approved_by, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&booking.id)
        .bind(&booking.tool_id)
        .bind(&booking.requested_by)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .bind(booking.status)
        .bind(&booking.approved_by)
        .bind(&booking.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    /// Set a booking's status and approver attribution in one statement.
    /// The caller guarantees `approved_by` is Some iff status is approved.
    pub async fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
        approved_by: Option<&str>,
    ) -> AppResult<ToolBooking> {
        sqlx::query_as::<_, ToolBooking>(
            "UPDATE tool_bookings SET status = $2, approved_by = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(approved_by)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }
}
