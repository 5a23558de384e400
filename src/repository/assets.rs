//! Assets repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::asset::Asset};

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all assets. No ordering is part of the contract; id order keeps
    /// the output deterministic for consumers that sort client-side.
    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        let rows = sqlx::query_as::<_, Asset>("SELECT * FROM assets ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a new asset record
    pub async fn create(&self, asset: &Asset) -> AppResult<Asset> {
        let row = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (id, name, location, asset_type, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&asset.id)
        .bind(&asset.name)
        .bind(&asset.location)
        .bind(&asset.asset_type)
        .bind(asset.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
