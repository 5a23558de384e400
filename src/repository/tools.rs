//! Tools repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::tool::Tool};

#[derive(Clone)]
pub struct ToolsRepository {
    pool: Pool<Postgres>,
}

impl ToolsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all tools ordered by name
    pub async fn list(&self) -> AppResult<Vec<Tool>> {
        let rows = sqlx::query_as::<_, Tool>("SELECT * FROM tools ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a new tool. The two optional columns are written only when
    /// supplied, same sparse-write discipline as work orders.
    pub async fn create(&self, tool: &Tool) -> AppResult<Tool> {
        let mut columns = vec!["id", "name"];
        if tool.description.is_some() {
            columns.push("description");
        }
        if tool.category.is_some() {
            columns.push("category");
        }

        let placeholders = (1..=columns.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!(
            "INSERT INTO tools ({}) VALUES ({}) RETURNING *",
            columns.join(", "),
            placeholders
        );

        let mut builder = sqlx::query_as::<_, Tool>(&query)
            .bind(&tool.id)
            .bind(&tool.name);
        if let Some(ref description) = tool.description {
            builder = builder.bind(description);
        }
        if let Some(ref category) = tool.category {
            builder = builder.bind(category);
        }

        let row = builder.fetch_one(&self.pool).await?;
        Ok(row)
    }
}
