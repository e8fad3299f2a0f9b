//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::MemoryRecipeRepository;
pub use postgres::PgRecipeRepository;
