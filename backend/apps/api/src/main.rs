//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request handling reports through the
//! per-crate error types.

mod config;

use auth::{AuthConfig, AuthGuard, PgAuthRepository, users_router};
use axum::Router;
use catalog::{PgCatalogRepository, authors_router, books_router};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let app = app(pool, Arc::new(config.auth));

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn app(pool: PgPool, auth: Arc<AuthConfig>) -> Router {
    let guard = AuthGuard::from_config(&auth);
    let catalog = PgCatalogRepository::new(pool.clone());

    Router::new()
        .nest("/api/authors", authors_router(catalog.clone(), guard.clone()))
        .nest("/api/books", books_router(catalog, guard))
        .nest("/api/users", users_router(PgAuthRepository::new(pool), auth))
        .layer(TraceLayer::new_for_http())
}
