use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod service;

use crate::auth::{default_accounts, IdentityProvider, StaticIdentityProvider};
use crate::config::{Config, StorageBackend};
use crate::db::{ItemStore, MemoryItemStore, PgItemStore};
use crate::service::GroceryService;

/// Shared application state. Cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub service: GroceryService,
    pub identities: Arc<dyn IdentityProvider>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,grocery_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    let store = open_store(&config).await?;

    info!("Hashing account credentials...");
    let identities = StaticIdentityProvider::new(default_accounts())
        .map_err(|e| anyhow::anyhow!("failed to hash account credentials: {e}"))?;

    let state = AppState {
        service: GroceryService::new(store),
        identities: Arc::new(identities),
    };

    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn open_store(config: &Config) -> anyhow::Result<Arc<dyn ItemStore>> {
    match &config.storage {
        StorageBackend::Postgres { database_url } => {
            info!("Connecting to PostgreSQL...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await
                .context("failed to connect to PostgreSQL")?;
            info!("Database connection pool established.");

            info!("Running migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Migrations complete.");

            Ok(Arc::new(PgItemStore::new(pool)))
        }
        StorageBackend::Memory => {
            info!("Using in-memory item store; data is lost on restart.");
            Ok(Arc::new(MemoryItemStore::new()))
        }
    }
}
