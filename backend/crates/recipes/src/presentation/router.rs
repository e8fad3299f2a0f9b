//! Recipes Router

use auth::{AuthMiddlewareState, RevocationStore, require_auth};
use axum::{Router, middleware, routing::get};
use std::sync::Arc;

use crate::domain::repository::{CategoryRepository, RecipeRepository};
use crate::presentation::handlers::{self, RecipesAppState};

/// Create the guarded category/recipe router
///
/// Collection routes answer with and without a trailing slash.
pub fn recipes_router<R, A>(repo: R, guard: AuthMiddlewareState<A>) -> Router
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
    A: RevocationStore + Clone + Send + Sync + 'static,
{
    let state = RecipesAppState {
        repo: Arc::new(repo),
    };

    let categories = || get(handlers::list_categories::<R>).post(handlers::create_category::<R>);
    let recipes = || get(handlers::list_recipes::<R>).post(handlers::create_recipe::<R>);

    Router::new()
        .route("/category", categories())
        .route("/category/", categories())
        .route(
            "/category/{category_id}",
            get(handlers::get_category::<R>)
                .put(handlers::update_category::<R>)
                .delete(handlers::delete_category::<R>),
        )
        .route("/category/{category_id}/recipes", recipes())
        .route("/category/{category_id}/recipes/", recipes())
        .route(
            "/category/{category_id}/recipes/{recipe_id}",
            get(handlers::get_recipe::<R>)
                .put(handlers::update_recipe::<R>)
                .delete(handlers::delete_recipe::<R>),
        )
        .route_layer(middleware::from_fn_with_state(guard, require_auth::<A>))
        .with_state(state)
}
