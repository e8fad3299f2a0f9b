//! Category Service

use std::sync::Arc;

use kernel::id::{CategoryId, UserId};

use crate::domain::entities::Category;
use crate::domain::repository::CategoryRepository;
use crate::domain::value_objects::Name;
use crate::error::{RecipeError, RecipeResult};

pub struct CategoryService<C>
where
    C: CategoryRepository,
{
    repo: Arc<C>,
}

impl<C> CategoryService<C>
where
    C: CategoryRepository,
{
    pub fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, owner_id: UserId, name: &str) -> RecipeResult<Category> {
        let name = Name::new(name).map_err(|_| RecipeError::InvalidCategoryName)?;
        let category = Category::new(owner_id, name);
        self.repo.create_category(&category).await?;

        tracing::info!(user_id = %owner_id, category_id = %category.id, "Category created");
        Ok(category)
    }

    pub async fn list(&self, owner_id: &UserId) -> RecipeResult<Vec<Category>> {
        self.repo.list_categories(owner_id).await
    }

    pub async fn get(&self, owner_id: &UserId, category_id: &CategoryId) -> RecipeResult<Category> {
        self.repo
            .find_category(owner_id, category_id)
            .await?
            .ok_or(RecipeError::CategoryNotFound)
    }

    pub async fn rename(
        &self,
        owner_id: &UserId,
        category_id: &CategoryId,
        name: &str,
    ) -> RecipeResult<Category> {
        let mut category = self.get(owner_id, category_id).await?;
        let name = Name::new(name).map_err(|_| RecipeError::InvalidCategoryName)?;

        category.rename(name);
        self.repo.update_category(&category).await?;
        Ok(category)
    }

    pub async fn delete(&self, owner_id: &UserId, category_id: &CategoryId) -> RecipeResult<()> {
        let category = self.get(owner_id, category_id).await?;
        self.repo.delete_category(&category.id).await?;

        tracing::info!(user_id = %owner_id, category_id = %category.id, "Category deleted");
        Ok(())
    }
}
