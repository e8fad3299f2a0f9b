//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, RecipeId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Category, Recipe};
use crate::domain::repository::{CategoryRepository, RecipeRepository};
use crate::domain::value_objects::Name;
use crate::error::RecipeResult;

/// PostgreSQL-backed category and recipe repository
#[derive(Clone)]
pub struct PgRecipeRepository {
    pool: PgPool,
}

impl PgRecipeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgRecipeRepository {
    async fn create_category(&self, category: &Category) -> RecipeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (category_id, user_id, name, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(category.id.as_uuid())
        .bind(category.owner_id.as_uuid())
        .bind(category.name.as_str())
        .bind(category.created_at)
        .bind(category.modified_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_categories(&self, owner_id: &UserId) -> RecipeResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, user_id, name, created_at, modified_at
            FROM categories
            WHERE user_id = $1
            ORDER BY created_at, category_id
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn find_category(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
    ) -> RecipeResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT category_id, user_id, name, created_at, modified_at
            FROM categories
            WHERE category_id = $1 AND user_id = $2
            "#,
        )
        .bind(category_id.as_uuid())
        .bind(owner_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }

    async fn update_category(&self, category: &Category) -> RecipeResult<()> {
        sqlx::query("UPDATE categories SET name = $2, modified_at = $3 WHERE category_id = $1")
            .bind(category.id.as_uuid())
            .bind(category.name.as_str())
            .bind(category.modified_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_category(&self, category_id: &CategoryId) -> RecipeResult<()> {
        // recipes.category_id cascades
        sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(category_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Recipe Repository Implementation
// ============================================================================

impl RecipeRepository for PgRecipeRepository {
    async fn create_recipe(&self, recipe: &Recipe) -> RecipeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO recipes (
                recipe_id,
                category_id,
                name,
                description,
                created_at,
                modified_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(recipe.id.as_uuid())
        .bind(recipe.category_id.as_uuid())
        .bind(recipe.name.as_str())
        .bind(recipe.description.as_deref())
        .bind(recipe.created_at)
        .bind(recipe.modified_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_recipes(&self, category_id: &CategoryId) -> RecipeResult<Vec<Recipe>> {
        let rows = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT recipe_id, category_id, name, description, created_at, modified_at
            FROM recipes
            WHERE category_id = $1
            ORDER BY created_at, recipe_id
            "#,
        )
        .bind(category_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(RecipeRow::into_recipe).collect())
    }

    async fn find_recipe(
        &self,
        category_id: &CategoryId,
        recipe_id: &RecipeId,
    ) -> RecipeResult<Option<Recipe>> {
        let row = sqlx::query_as::<_, RecipeRow>(
            r#"
            SELECT recipe_id, category_id, name, description, created_at, modified_at
            FROM recipes
            WHERE recipe_id = $1 AND category_id = $2
            "#,
        )
        .bind(recipe_id.as_uuid())
        .bind(category_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RecipeRow::into_recipe))
    }

    async fn update_recipe(&self, recipe: &Recipe) -> RecipeResult<()> {
        sqlx::query(
            r#"
            UPDATE recipes SET
                name = $2,
                description = $3,
                modified_at = $4
            WHERE recipe_id = $1
            "#,
        )
        .bind(recipe.id.as_uuid())
        .bind(recipe.name.as_str())
        .bind(recipe.description.as_deref())
        .bind(recipe.modified_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_recipe(&self, recipe_id: &RecipeId) -> RecipeResult<()> {
        sqlx::query("DELETE FROM recipes WHERE recipe_id = $1")
            .bind(recipe_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CategoryRow {
    category_id: Uuid,
    user_id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: CategoryId::from_uuid(self.category_id),
            owner_id: UserId::from_uuid(self.user_id),
            name: Name::from_db(self.name),
            created_at: self.created_at,
            modified_at: self.modified_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    recipe_id: Uuid,
    category_id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    modified_at: DateTime<Utc>,
}

impl RecipeRow {
    fn into_recipe(self) -> Recipe {
        Recipe {
            id: RecipeId::from_uuid(self.recipe_id),
            category_id: CategoryId::from_uuid(self.category_id),
            name: Name::from_db(self.name),
            description: self.description,
            created_at: self.created_at,
            modified_at: self.modified_at,
        }
    }
}
