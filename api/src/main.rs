//! Aster API Server

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aster_api::adapters::{HttpDocumentStore, InMemoryDocumentStore, PostgresDocumentStore};
use aster_api::config::{Config, StoreBackend};
use aster_api::domain::ports::DocumentStore;
use aster_api::{build_router, AppState};

async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn DocumentStore>> {
    let store: Arc<dyn DocumentStore> = match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, content is lost on restart");
            Arc::new(InMemoryDocumentStore::new())
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is not set")?;
            tracing::info!("Connecting to database...");
            let db = Database::connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");
            Arc::new(PostgresDocumentStore::new(db))
        }
        StoreBackend::Http => {
            let url = config
                .document_api_url
                .clone()
                .context("DOCUMENT_API_URL is not set")?;
            tracing::info!(url = %url, "Using remote document API");
            Arc::new(HttpDocumentStore::new(
                url,
                config.document_api_token.clone(),
                config.store_timeout,
            )?)
        }
    };

    Ok(store)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,aster_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Aster API...");

    // Load configuration
    let config = Config::from_env()?;

    if !config.operator_enabled() {
        tracing::warn!("OPERATOR_KEY_HASH is not set, back-office routes will reject every request");
    }

    let store = connect_store(&config).await?;
    let state = AppState::new(
        store,
        config.store_timeout,
        config.operator_key_hash.clone(),
    );

    let app = build_router(state, config.rate_limit_inquiries);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
