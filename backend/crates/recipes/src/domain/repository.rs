//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CategoryId, RecipeId, UserId};

use crate::domain::entities::{Category, Recipe};
use crate::error::RecipeResult;

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    async fn create_category(&self, category: &Category) -> RecipeResult<()>;

    /// Categories of one owner, oldest first
    async fn list_categories(&self, owner_id: &UserId) -> RecipeResult<Vec<Category>>;

    /// A category, only if `owner_id` owns it
    async fn find_category(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
    ) -> RecipeResult<Option<Category>>;

    async fn update_category(&self, category: &Category) -> RecipeResult<()>;

    /// Delete a category together with its recipes
    async fn delete_category(&self, category_id: &CategoryId) -> RecipeResult<()>;
}

/// Recipe repository trait
#[trait_variant::make(RecipeRepository: Send)]
pub trait LocalRecipeRepository {
    async fn create_recipe(&self, recipe: &Recipe) -> RecipeResult<()>;

    /// Recipes of one category, oldest first
    async fn list_recipes(&self, category_id: &CategoryId) -> RecipeResult<Vec<Recipe>>;

    async fn find_recipe(
        &self,
        category_id: &CategoryId,
        recipe_id: &RecipeId,
    ) -> RecipeResult<Option<Recipe>>;

    async fn update_recipe(&self, recipe: &Recipe) -> RecipeResult<()>;

    async fn delete_recipe(&self, recipe_id: &RecipeId) -> RecipeResult<()>;
}
