//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::{Category, Recipe};
pub use repository::{CategoryRepository, RecipeRepository};
pub use value_objects::Name;
