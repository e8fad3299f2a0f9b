//! Application Layer
//!
//! Category and recipe services. Every operation is scoped to the
//! authenticated owner.

pub mod categories;
pub mod recipes;

pub use categories::CategoryService;
pub use recipes::{RecipeInput, RecipeService};
