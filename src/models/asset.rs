//! Asset model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::AssetStatus;

/// Physical asset record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Generated identifier (`ASSET-<uuid>`), immutable once set
    pub id: String,
    pub name: String,
    pub location: String,
    /// Free-form asset type label (Pump, Conveyor, HVAC, ...)
    #[serde(rename = "type")]
    pub asset_type: String,
    pub status: AssetStatus,
}

/// Create asset request. All three fields are required; new assets
/// always start `Online`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
}
