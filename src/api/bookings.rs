//! Tool booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::booking::{CreateBooking, ToolBooking, UpdateBookingStatus},
};

/// List all bookings ordered by start time
#[utoipa::path(
    get,
    path = "/toolbookings",
    tag = "toolbookings",
    responses(
        (status = 200, description = "All bookings ordered by start time", body = Vec<ToolBooking>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ToolBooking>>> {
    let bookings = state.services.bookings.list().await?;
    Ok(Json(bookings))
}

/// Request a tool booking
#[utoipa::path(
    post,
    path = "/toolbookings",
    tag = "toolbookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking requested", body = ToolBooking),
        (status = 400, description = "Missing fields or invalid interval"),
        (status = 409, description = "Time slot conflicts with an existing booking")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<ToolBooking>)> {
    let booking = state.services.bookings.request(request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Update a booking's status
#[utoipa::path(
    put,
    path = "/toolbookings/{id}/status",
    tag = "toolbookings",
    params(
        ("id" = String, Path, description = "Booking ID")
    ),
    request_body = UpdateBookingStatus,
    responses(
        (status = 200, description = "Booking updated", body = ToolBooking),
        (status = 400, description = "Invalid status or missing approver"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn update_booking_status(
    State(state): State<crate::AppState>,
    Path(booking_id): Path<String>,
    Json(update): Json<UpdateBookingStatus>,
) -> AppResult<Json<ToolBooking>> {
    let booking = state
        .services
        .bookings
        .update_status(&booking_id, update)
        .await?;
    Ok(Json(booking))
}
