//! Tool catalog service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::tool::{CreateTool, Tool},
    repository::Repository,
};

#[derive(Clone)]
pub struct ToolsService {
    repository: Repository,
}

impl ToolsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all tools ordered by name
    pub async fn list(&self) -> AppResult<Vec<Tool>> {
        self.repository.tools.list().await
    }

    /// Create a new tool; only the name is required
    pub async fn create(&self, request: CreateTool) -> AppResult<Tool> {
        let Some(name) = request.name.filter(|n| !n.trim().is_empty()) else {
            return Err(AppError::Validation(
                "Missing required field: name".to_string(),
            ));
        };

        let tool = Tool {
            id: format!("tool-{}", Uuid::new_v4()),
            name,
            description: request.description,
            category: request.category,
        };

        self.repository.tools.create(&tool).await
    }
}
