//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use anyhow::Context;
use auth::{AuthAppState, AuthConfig, PgAuthRepository, RevocationStore, auth_router};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use recipes::{PgRecipeRepository, recipes_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_SWEEP_SECS: u64 = 3600;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,recipes=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AuthConfig::from_env()?;

    // Database connection
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_repo = PgAuthRepository::new(pool.clone());

    // Startup cleanup: drop revocation records for tokens that expired anyway.
    // Errors here should not prevent server startup
    sweep_revocations(&auth_repo).await;

    let sweep_secs = match env::var("REVOCATION_SWEEP_SECS") {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("REVOCATION_SWEEP_SECS is not a number: {raw}"))?,
        Err(_) => DEFAULT_SWEEP_SECS,
    };
    let sweeper = auth_repo.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(sweep_secs.max(1)));
        // The first tick fires immediately and startup already swept.
        interval.tick().await;
        loop {
            interval.tick().await;
            sweep_revocations(&sweeper).await;
        }
    });

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Build router
    let auth_state = AuthAppState::new(auth_repo, config);
    let guard = auth_state.guard();

    let app = Router::new()
        .route("/", get(index))
        .nest("/auth", auth_router(auth_state))
        .merge(recipes_router(PgRecipeRepository::new(pool.clone()), guard))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("BIND_ADDR must be host:port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index() -> &'static str {
    "Hello Yummy recipes"
}

async fn sweep_revocations(repo: &PgAuthRepository) {
    match repo.purge_expired(chrono::Utc::now()).await {
        Ok(purged) => {
            tracing::info!(records_deleted = purged, "Revocation sweep completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Revocation sweep failed, continuing anyway");
        }
    }
}
