//! Asset management endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppResult,
    models::asset::{Asset, CreateAsset},
};

/// List all assets
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    responses(
        (status = 200, description = "All registered assets", body = Vec<Asset>)
    )
)]
pub async fn list_assets(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list().await?;
    Ok(Json(assets))
}

/// Register a new asset
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let asset = state.services.assets.create(request).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}
