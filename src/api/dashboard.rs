//! Dashboard endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, metrics::DashboardKpis};

/// Get the dashboard KPI document
#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "Current dashboard KPIs", body = DashboardKpis)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardKpis>> {
    let kpis = state.services.dashboard.kpis().await?;
    Ok(Json(kpis))
}
