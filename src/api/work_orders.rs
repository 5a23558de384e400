//! Work order endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::work_order::{CreateWorkOrder, WorkOrder},
};

/// List all work orders, newest report first
#[utoipa::path(
    get,
    path = "/workorders",
    tag = "workorders",
    responses(
        (status = 200, description = "All work orders, newest first", body = Vec<WorkOrder>)
    )
)]
pub async fn list_work_orders(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<WorkOrder>>> {
    let work_orders = state.services.work_orders.list().await?;
    Ok(Json(work_orders))
}

/// Create a new work order
#[utoipa::path(
    post,
    path = "/workorders",
    tag = "workorders",
    request_body = CreateWorkOrder,
    responses(
        (status = 201, description = "Work order created", body = WorkOrder),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_work_order(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateWorkOrder>,
) -> AppResult<(StatusCode, Json<WorkOrder>)> {
    let work_order = state.services.work_orders.create(request).await?;
    Ok((StatusCode::CREATED, Json(work_order)))
}
