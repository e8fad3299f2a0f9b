//! HTTP Handlers
//!
//! All handlers run behind the access guard and read the caller from
//! [`CurrentUser`].

use auth::CurrentUser;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kernel::id::{CategoryId, RecipeId};
use kernel::response::{MessageResponse, Status};
use std::sync::Arc;

use crate::application::{CategoryService, RecipeInput, RecipeService};
use crate::domain::repository::{CategoryRepository, RecipeRepository};
use crate::error::{RecipeError, RecipeResult};
use crate::presentation::dto::{
    CategoryListResponse, CategoryRequest, CategoryResponse, RecipeListResponse, RecipeRequest,
    RecipeResponse,
};

/// Shared state for recipe handlers
#[derive(Clone)]
pub struct RecipesAppState<R>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Unwrap a JSON body, telling a wrong content type apart from bad content
fn json_body<T>(payload: Result<Json<T>, JsonRejection>, on_invalid: RecipeError) -> RecipeResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Err(RecipeError::ContentType),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected request body");
            Err(on_invalid)
        }
    }
}

/// Ids that do not parse cannot exist
fn category_id(raw: &str) -> RecipeResult<CategoryId> {
    CategoryId::parse_str(raw).map_err(|_| RecipeError::CategoryNotFound)
}

fn recipe_id(raw: &str) -> RecipeResult<RecipeId> {
    RecipeId::parse_str(raw).map_err(|_| RecipeError::RecipeNotFound)
}

fn category_response(category: crate::domain::entities::Category) -> CategoryResponse {
    CategoryResponse {
        status: Status::Success,
        category: category.into(),
    }
}

fn recipe_response(recipe: crate::domain::entities::Recipe) -> RecipeResponse {
    RecipeResponse {
        status: Status::Success,
        recipe: recipe.into(),
    }
}

// ============================================================================
// Categories
// ============================================================================

/// POST /category/
pub async fn create_category<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> RecipeResult<impl IntoResponse>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(payload, RecipeError::InvalidCategoryName)?;
    let name = req.name.ok_or(RecipeError::InvalidCategoryName)?;

    let category = CategoryService::new(state.repo.clone())
        .create(current.user_id, &name)
        .await?;

    Ok((StatusCode::CREATED, Json(category_response(category))))
}

/// GET /category/
pub async fn list_categories<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
) -> RecipeResult<Json<CategoryListResponse>>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let categories = CategoryService::new(state.repo.clone())
        .list(&current.user_id)
        .await?;

    Ok(Json(CategoryListResponse {
        status: Status::Success,
        categories: categories.into_iter().map(Into::into).collect(),
    }))
}

/// GET /category/{category_id}
pub async fn get_category<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(raw_category_id): Path<String>,
) -> RecipeResult<Json<CategoryResponse>>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let category_id = category_id(&raw_category_id)?;
    let category = CategoryService::new(state.repo.clone())
        .get(&current.user_id, &category_id)
        .await?;

    Ok(Json(category_response(category)))
}

/// PUT /category/{category_id}
pub async fn update_category<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(raw_category_id): Path<String>,
    payload: Result<Json<CategoryRequest>, JsonRejection>,
) -> RecipeResult<Json<CategoryResponse>>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let category_id = category_id(&raw_category_id)?;
    let req = json_body(payload, RecipeError::InvalidCategoryName)?;
    let name = req.name.ok_or(RecipeError::InvalidCategoryName)?;

    let category = CategoryService::new(state.repo.clone())
        .rename(&current.user_id, &category_id, &name)
        .await?;

    Ok(Json(category_response(category)))
}

/// DELETE /category/{category_id}
pub async fn delete_category<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(raw_category_id): Path<String>,
) -> RecipeResult<Json<MessageResponse>>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let category_id = category_id(&raw_category_id)?;
    CategoryService::new(state.repo.clone())
        .delete(&current.user_id, &category_id)
        .await?;

    Ok(Json(MessageResponse::success("Category deleted successfully")))
}

// ============================================================================
// Recipes
// ============================================================================

fn recipe_input(req: RecipeRequest) -> RecipeResult<RecipeInput> {
    Ok(RecipeInput {
        name: req.name.ok_or(RecipeError::InvalidRecipeName)?,
        description: req.description,
    })
}

/// POST /category/{category_id}/recipes
pub async fn create_recipe<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(raw_category_id): Path<String>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> RecipeResult<impl IntoResponse>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let category_id = category_id(&raw_category_id)?;
    let input = recipe_input(json_body(payload, RecipeError::InvalidRecipeName)?)?;

    let recipe = RecipeService::new(state.repo.clone(), state.repo.clone())
        .create(&current.user_id, &category_id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(recipe_response(recipe))))
}

/// GET /category/{category_id}/recipes
pub async fn list_recipes<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path(raw_category_id): Path<String>,
) -> RecipeResult<Json<RecipeListResponse>>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let category_id = category_id(&raw_category_id)?;
    let recipes = RecipeService::new(state.repo.clone(), state.repo.clone())
        .list(&current.user_id, &category_id)
        .await?;

    Ok(Json(RecipeListResponse {
        status: Status::Success,
        recipes: recipes.into_iter().map(Into::into).collect(),
    }))
}

/// GET /category/{category_id}/recipes/{recipe_id}
pub async fn get_recipe<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path((raw_category_id, raw_recipe_id)): Path<(String, String)>,
) -> RecipeResult<Json<RecipeResponse>>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let category_id = category_id(&raw_category_id)?;
    let recipe_id = recipe_id(&raw_recipe_id)?;

    let recipe = RecipeService::new(state.repo.clone(), state.repo.clone())
        .get(&current.user_id, &category_id, &recipe_id)
        .await?;

    Ok(Json(recipe_response(recipe)))
}

/// PUT /category/{category_id}/recipes/{recipe_id}
pub async fn update_recipe<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path((raw_category_id, raw_recipe_id)): Path<(String, String)>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> RecipeResult<Json<RecipeResponse>>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let category_id = category_id(&raw_category_id)?;
    let recipe_id = recipe_id(&raw_recipe_id)?;
    let input = recipe_input(json_body(payload, RecipeError::InvalidRecipeName)?)?;

    let recipe = RecipeService::new(state.repo.clone(), state.repo.clone())
        .update(&current.user_id, &category_id, &recipe_id, input)
        .await?;

    Ok(Json(recipe_response(recipe)))
}

/// DELETE /category/{category_id}/recipes/{recipe_id}
pub async fn delete_recipe<R>(
    State(state): State<RecipesAppState<R>>,
    Extension(current): Extension<CurrentUser>,
    Path((raw_category_id, raw_recipe_id)): Path<(String, String)>,
) -> RecipeResult<Json<MessageResponse>>
where
    R: CategoryRepository + RecipeRepository + Clone + Send + Sync + 'static,
{
    let category_id = category_id(&raw_category_id)?;
    let recipe_id = recipe_id(&raw_recipe_id)?;

    RecipeService::new(state.repo.clone(), state.repo.clone())
        .delete(&current.user_id, &category_id, &recipe_id)
        .await?;

    Ok(Json(MessageResponse::success("Recipe deleted successfully")))
}
