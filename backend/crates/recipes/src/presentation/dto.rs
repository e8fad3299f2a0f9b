//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, RecipeId};
use kernel::response::Status;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Category, Recipe};
use crate::domain::value_objects::Name;

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: CategoryId,
    pub name: Name,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            created_at: category.created_at,
            modified_at: category.modified_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: RecipeId,
    pub name: Name,
    pub description: Option<String>,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            description: recipe.description,
            category_id: recipe.category_id,
            created_at: recipe.created_at,
            modified_at: recipe.modified_at,
        }
    }
}

/// Single category with the success marker alongside its fields
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub status: Status,
    #[serde(flatten)]
    pub category: CategoryDto,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub status: Status,
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub status: Status,
    #[serde(flatten)]
    pub recipe: RecipeDto,
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub status: Status,
    pub recipes: Vec<RecipeDto>,
}
