//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{CategoryId, RecipeId, UserId};

use crate::domain::value_objects::Name;

/// Category entity - a named group of recipes owned by one user
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub owner_id: UserId,
    pub name: Name,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Category {
    pub fn new(owner_id: UserId, name: Name) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            owner_id,
            name,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn rename(&mut self, name: Name) {
        self.name = name;
        self.modified_at = Utc::now();
    }
}

/// Recipe entity
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub category_id: CategoryId,
    pub name: Name,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Recipe {
    pub fn new(category_id: CategoryId, name: Name, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: RecipeId::new(),
            category_id,
            name,
            description,
            created_at: now,
            modified_at: now,
        }
    }

    /// Rename, replacing the description only when one is given
    pub fn update(&mut self, name: Name, description: Option<String>) {
        self.name = name;
        if description.is_some() {
            self.description = description;
        }
        self.modified_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_touches_modified_at() {
        let mut category = Category::new(UserId::new(), Name::new("Lunch").unwrap());
        let created = category.created_at;
        category.rename(Name::new("Dinner").unwrap());

        assert_eq!(category.name.as_str(), "Dinner");
        assert!(category.modified_at >= created);
        assert_eq!(category.created_at, created);
    }

    #[test]
    fn test_update_keeps_description_when_omitted() {
        let mut recipe = Recipe::new(
            CategoryId::new(),
            Name::new("Pancakes").unwrap(),
            Some("Flour, eggs, milk".to_string()),
        );

        recipe.update(Name::new("Crepes").unwrap(), None);
        assert_eq!(recipe.description.as_deref(), Some("Flour, eggs, milk"));

        recipe.update(Name::new("Crepes").unwrap(), Some("Thin".to_string()));
        assert_eq!(recipe.description.as_deref(), Some("Thin"));
    }
}
