//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::{assets, bookings, dashboard, health, tools, work_orders};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mainstay API",
        version = "1.0.0",
        description = "Maintenance Management System REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        // Assets
        assets::list_assets,
        assets::create_asset,
        // Work orders
        work_orders::list_work_orders,
        work_orders::create_work_order,
        // Tools
        tools::list_tools,
        tools::create_tool,
        // Bookings
        bookings::list_bookings,
        bookings::create_booking,
        bookings::update_booking_status,
        // Dashboard
        dashboard::get_dashboard,
    ),
    components(
        schemas(
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::CreateAsset,
            crate::models::enums::AssetStatus,
            // Work orders
            crate::models::work_order::WorkOrder,
            crate::models::work_order::CreateWorkOrder,
            crate::models::enums::WorkOrderType,
            crate::models::enums::WorkOrderStatus,
            crate::models::enums::WorkOrderPriority,
            crate::models::enums::FailureCode,
            // Tools
            crate::models::tool::Tool,
            crate::models::tool::CreateTool,
            // Bookings
            crate::models::booking::ToolBooking,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBookingStatus,
            crate::models::enums::BookingStatus,
            // Dashboard
            crate::metrics::DashboardKpis,
            crate::metrics::TrendPoint,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "assets", description = "Asset registry"),
        (name = "workorders", description = "Work order management"),
        (name = "tools", description = "Tool catalog"),
        (name = "toolbookings", description = "Tool booking requests and approvals"),
        (name = "dashboard", description = "Dashboard KPIs")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
