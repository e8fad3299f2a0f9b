//! Router tests: auth and recipes mounted together on in-memory stores.

use auth::{AuthAppState, AuthConfig, MemoryAuthRepository, auth_router};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::{MemoryRecipeRepository, recipes_router};

fn app() -> Router {
    let state = AuthAppState::new(MemoryAuthRepository::new(), AuthConfig::testing());
    let guard = state.guard();

    Router::new()
        .nest("/auth", auth_router(state))
        .merge(recipes_router(MemoryRecipeRepository::new(), guard))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn register(app: &Router, email: &str) -> String {
    let req = Request::post("/auth/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": email, "password": "123456789"}).to_string(),
        ))
        .unwrap();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::CREATED);
    body["authentication_token"].as_str().unwrap().to_string()
}

async fn create_category(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = send(
        app,
        request("POST", "/category/", token, Some(json!({"name": name}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_category_lifecycle() {
    let app = app();
    let token = register(&app, "cook@example.com").await;

    let (status, body) = send(
        &app,
        request("POST", "/category", &token, Some(json!({"name": "  Breakfast "}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["name"], "Breakfast");
    let id = body["id"].as_str().unwrap().to_string();
    assert!(body["createdAt"].is_string());

    let (status, body) = send(&app, request("GET", "/category/", &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["categories"].as_array().unwrap().len(), 1);

    let uri = format!("/category/{id}");
    let (status, body) = send(
        &app,
        request("PUT", &uri, &token, Some(json!({"name": "Brunch"}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Brunch");

    let (status, body) = send(&app, request("DELETE", &uri, &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category deleted successfully");

    let (status, body) = send(&app, request("GET", &uri, &token, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");
}

#[tokio::test]
async fn test_recipe_lifecycle() {
    let app = app();
    let token = register(&app, "cook@example.com").await;
    let category_id = create_category(&app, &token, "Dinner").await;
    let recipes_uri = format!("/category/{category_id}/recipes");

    let (status, body) = send(
        &app,
        request(
            "POST",
            &recipes_uri,
            &token,
            Some(json!({"name": "Stew", "description": "Slow cooked"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["categoryId"], category_id.as_str());
    let recipe_uri = format!("{recipes_uri}/{}", body["id"].as_str().unwrap());

    let (status, body) = send(
        &app,
        request("PUT", &recipe_uri, &token, Some(json!({"name": "Beef stew"}))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Beef stew");
    assert_eq!(body["description"], "Slow cooked");

    let (status, body) = send(&app, request("GET", &format!("{recipes_uri}/"), &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipes"].as_array().unwrap().len(), 1);

    let (status, body) = send(&app, request("DELETE", &recipe_uri, &token, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe deleted successfully");

    let (status, _) = send(&app, request("GET", &recipe_uri, &token, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_category_removes_its_recipes() {
    let app = app();
    let token = register(&app, "cook@example.com").await;
    let category_id = create_category(&app, &token, "Desserts").await;
    let recipes_uri = format!("/category/{category_id}/recipes");

    let (_, body) = send(
        &app,
        request("POST", &recipes_uri, &token, Some(json!({"name": "Flan"}))),
    )
    .await;
    let recipe_uri = format!("{recipes_uri}/{}", body["id"].as_str().unwrap());

    send(&app, request("DELETE", &format!("/category/{category_id}"), &token, None)).await;

    let (status, body) = send(&app, request("GET", &recipe_uri, &token, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");
}

#[tokio::test]
async fn test_categories_are_private_to_their_owner() {
    let app = app();
    let alice = register(&app, "alice@example.com").await;
    let bob = register(&app, "bob@example.com").await;
    let category_id = create_category(&app, &alice, "Soups").await;

    let (status, _) = send(
        &app,
        request("GET", &format!("/category/{category_id}"), &bob, None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        request(
            "POST",
            &format!("/category/{category_id}/recipes"),
            &bob,
            Some(json!({"name": "Borscht"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, request("GET", "/category", &bob, None)).await;
    assert!(body["categories"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_input() {
    let app = app();
    let token = register(&app, "cook@example.com").await;

    let (status, body) = send(
        &app,
        request("POST", "/category/", &token, Some(json!({"name": "   "}))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing or invalid category name");

    let (status, _) = send(&app, request("POST", "/category/", &token, Some(json!({})))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = Request::post("/category/")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(r#"{"name":"Lunch"}"#))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Content-type must be json");

    let category_id = create_category(&app, &token, "Lunch").await;
    let (status, body) = send(
        &app,
        request(
            "POST",
            &format!("/category/{category_id}/recipes"),
            &token,
            Some(json!({"description": "no name"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing or invalid recipe name");
}

#[tokio::test]
async fn test_unparseable_ids_are_not_found() {
    let app = app();
    let token = register(&app, "cook@example.com").await;

    let (status, _) = send(&app, request("GET", "/category/not-a-uuid", &token, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let category_id = create_category(&app, &token, "Snacks").await;
    let (status, body) = send(
        &app,
        request(
            "GET",
            &format!("/category/{category_id}/recipes/42"),
            &token,
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Recipe not found");
}

#[tokio::test]
async fn test_routes_require_a_live_session() {
    let app = app();

    let (status, body) = send(
        &app,
        Request::get("/category/").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token is missing");

    let token = register(&app, "cook@example.com").await;
    let (status, _) = send(&app, request("POST", "/auth/logout", &token, None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request("GET", "/category/", &token, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Token was banned, Please login In");
}
