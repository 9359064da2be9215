//! Customer service binary: reads settings from the environment, prepares the store, serves HTTP.

use customer_service::{
    app, ensure_customer_table, ensure_database_exists, AppConfig, AppState, CustomerRepository,
    InMemoryCustomerRepository, PgCustomerRepository, StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("customer_service=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let repo: Arc<dyn CustomerRepository> = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_customer_table(&pool).await?;
            Arc::new(PgCustomerRepository::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on shutdown");
            Arc::new(InMemoryCustomerRepository::new())
        }
    };

    let router = app(AppState::new(repo), config.body_limit_bytes);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(store = ?config.store, "listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
