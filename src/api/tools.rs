//! Tool catalog endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::tool::{CreateTool, Tool},
};

/// List all tools ordered by name
#[utoipa::path(
    get,
    path = "/tools",
    tag = "tools",
    responses(
        (status = 200, description = "All tools ordered by name", body = Vec<Tool>)
    )
)]
pub async fn list_tools(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Tool>>> {
    let tools = state.services.tools.list().await?;
    Ok(Json(tools))
}

/// Add a tool to the catalog
#[utoipa::path(
    post,
    path = "/tools",
    tag = "tools",
    request_body = CreateTool,
    responses(
        (status = 201, description = "Tool created", body = Tool),
        (status = 400, description = "Missing required field")
    )
)]
pub async fn create_tool(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateTool>,
) -> AppResult<(StatusCode, Json<Tool>)> {
    let tool = state.services.tools.create(request).await?;
    Ok((StatusCode::CREATED, Json(tool)))
}
