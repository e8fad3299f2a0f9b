//! Recipes Backend Module
//!
//! Categories owned by a user, each holding recipes. Every route sits behind
//! the auth crate's access guard.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, names, repository traits
//! - `application/` - Category and recipe services
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{RecipeError, RecipeResult};
pub use infra::{memory::MemoryRecipeRepository, postgres::PgRecipeRepository};
pub use presentation::router::recipes_router;

#[cfg(test)]
mod tests;
