//! Recipe Service
//!
//! Recipes are reached through a category the caller owns; an unknown or
//! foreign category reads as not found.

use std::sync::Arc;

use kernel::id::{CategoryId, RecipeId, UserId};

use crate::domain::entities::Recipe;
use crate::domain::repository::{CategoryRepository, RecipeRepository};
use crate::domain::value_objects::Name;
use crate::error::{RecipeError, RecipeResult};

/// Fields accepted on create and update
pub struct RecipeInput {
    pub name: String,
    pub description: Option<String>,
}

pub struct RecipeService<C, R>
where
    C: CategoryRepository,
    R: RecipeRepository,
{
    categories: Arc<C>,
    recipes: Arc<R>,
}

impl<C, R> RecipeService<C, R>
where
    C: CategoryRepository,
    R: RecipeRepository,
{
    pub fn new(categories: Arc<C>, recipes: Arc<R>) -> Self {
        Self {
            categories,
            recipes,
        }
    }

    async fn owned_category(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
    ) -> RecipeResult<CategoryId> {
        self.categories
            .find_category(owner_id, category_id)
            .await?
            .map(|category| category.id)
            .ok_or(RecipeError::CategoryNotFound)
    }

    pub async fn create(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
        input: RecipeInput,
    ) -> RecipeResult<Recipe> {
        let category_id = self.owned_category(owner_id, category_id).await?;
        let name = Name::new(&input.name).map_err(|_| RecipeError::InvalidRecipeName)?;

        let recipe = Recipe::new(category_id, name, input.description);
        self.recipes.create_recipe(&recipe).await?;

        tracing::info!(category_id = %category_id, recipe_id = %recipe.id, "Recipe created");
        Ok(recipe)
    }

    pub async fn list(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
    ) -> RecipeResult<Vec<Recipe>> {
        let category_id = self.owned_category(owner_id, category_id).await?;
        self.recipes.list_recipes(&category_id).await
    }

    pub async fn get(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
        recipe_id: &RecipeId,
    ) -> RecipeResult<Recipe> {
        let category_id = self.owned_category(owner_id, category_id).await?;
        self.recipes
            .find_recipe(&category_id, recipe_id)
            .await?
            .ok_or(RecipeError::RecipeNotFound)
    }

    pub async fn update(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
        recipe_id: &RecipeId,
        input: RecipeInput,
    ) -> RecipeResult<Recipe> {
        let mut recipe = self.get(owner_id, category_id, recipe_id).await?;
        let name = Name::new(&input.name).map_err(|_| RecipeError::InvalidRecipeName)?;

        recipe.update(name, input.description);
        self.recipes.update_recipe(&recipe).await?;
        Ok(recipe)
    }

    pub async fn delete(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
        recipe_id: &RecipeId,
    ) -> RecipeResult<()> {
        let recipe = self.get(owner_id, category_id, recipe_id).await?;
        self.recipes.delete_recipe(&recipe.id).await?;

        tracing::info!(recipe_id = %recipe.id, "Recipe deleted");
        Ok(())
    }
}
