//! Asset lifecycle service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        asset::{Asset, CreateAsset},
        enums::AssetStatus,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct AssetsService {
    repository: Repository,
}

impl AssetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all assets
    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        self.repository.assets.list().await
    }

    /// Create a new asset. Name, location and type are all required;
    /// new assets always start `Online`.
    pub async fn create(&self, request: CreateAsset) -> AppResult<Asset> {
        let missing = missing_fields(&request);
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let asset = Asset {
            id: format!("ASSET-{}", Uuid::new_v4()),
            name: request.name.unwrap_or_default(),
            location: request.location.unwrap_or_default(),
            asset_type: request.asset_type.unwrap_or_default(),
            status: AssetStatus::Online,
        };

        self.repository.assets.create(&asset).await
    }
}

fn missing_fields(request: &CreateAsset) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if request.name.as_deref().map_or(true, |s| s.trim().is_empty()) {
        missing.push("name");
    }
    if request.location.as_deref().map_or(true, |s| s.trim().is_empty()) {
        missing.push("location");
    }
    if request.asset_type.as_deref().map_or(true, |s| s.trim().is_empty()) {
        missing.push("type");
    }
    missing
}
