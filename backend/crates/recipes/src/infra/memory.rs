//! In-Memory Repository
//!
//! Same contracts as the PostgreSQL implementation; used by tests.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::{CategoryId, RecipeId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::{Category, Recipe};
use crate::domain::repository::{CategoryRepository, RecipeRepository};
use crate::error::RecipeResult;

#[derive(Clone, Default)]
pub struct MemoryRecipeRepository {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
    recipes: Arc<RwLock<HashMap<RecipeId, Recipe>>>,
}

impl MemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for MemoryRecipeRepository {
    async fn create_category(&self, category: &Category) -> RecipeResult<()> {
        self.categories
            .write()
            .await
            .insert(category.id, category.clone());
        Ok(())
    }

    async fn list_categories(&self, owner_id: &UserId) -> RecipeResult<Vec<Category>> {
        let mut owned: Vec<Category> = self
            .categories
            .read()
            .await
            .values()
            .filter(|c| &c.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by_key(|c| c.created_at);
        Ok(owned)
    }

    async fn find_category(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
    ) -> RecipeResult<Option<Category>> {
        Ok(self
            .categories
            .read()
            .await
            .get(category_id)
            .filter(|c| &c.owner_id == owner_id)
            .cloned())
    }

    async fn update_category(&self, category: &Category) -> RecipeResult<()> {
        if let Some(stored) = self.categories.write().await.get_mut(&category.id) {
            *stored = category.clone();
        }
        Ok(())
    }

    async fn delete_category(&self, category_id: &CategoryId) -> RecipeResult<()> {
        self.categories.write().await.remove(category_id);
        self.recipes
            .write()
            .await
            .retain(|_, r| &r.category_id != category_id);
        Ok(())
    }
}

impl RecipeRepository for MemoryRecipeRepository {
    async fn create_recipe(&self, recipe: &Recipe) -> RecipeResult<()> {
        self.recipes.write().await.insert(recipe.id, recipe.clone());
        Ok(())
    }

    async fn list_recipes(&self, category_id: &CategoryId) -> RecipeResult<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self
            .recipes
            .read()
            .await
            .values()
            .filter(|r| &r.category_id == category_id)
            .cloned()
            .collect();
        recipes.sort_by_key(|r| r.created_at);
        Ok(recipes)
    }

    async fn find_recipe(
        &self,
        category_id: &CategoryId,
        recipe_id: &RecipeId,
    ) -> RecipeResult<Option<Recipe>> {
        Ok(self
            .recipes
            .read()
            .await
            .get(recipe_id)
            .filter(|r| &r.category_id == category_id)
            .cloned())
    }

    async fn update_recipe(&self, recipe: &Recipe) -> RecipeResult<()> {
        if let Some(stored) = self.recipes.write().await.get_mut(&recipe.id) {
            *stored = recipe.clone();
        }
        Ok(())
    }

    async fn delete_recipe(&self, recipe_id: &RecipeId) -> RecipeResult<()> {
        self.recipes.write().await.remove(recipe_id);
        Ok(())
    }
}
