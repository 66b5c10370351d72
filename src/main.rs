use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tracing_subscriber::EnvFilter;

mod config;
mod database;
mod dtos;
mod errors;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod state;

use config::AppConfig;
use database::store::{load_or_seed, JsonFileStore, StateStore};
use services::password::PasswordHasher;
use services::token::TokenService;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!("⚙️  Config: {}", config.get_config_info());

    let app_state = initialize_app_state(&config).await?;
    app_state.prices.spawn(config.price_tick);
    tracing::info!("📈 Price feed ticking every {:?}", config.price_tick);

    let app = routes::build_router(app_state);
    start_server(app, &config).await
}

async fn initialize_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = JsonFileStore::new(&config.data_dir);
    tracing::info!("💾 Using data directory {}", store.dir().display());

    let hasher = PasswordHasher::new(config.bcrypt_cost);
    let ledger = load_or_seed(&store, hasher)
        .await
        .context("Failed to load ledger state")?;

    // Mirror immediately so a seeded start is durable before the first mutation
    store
        .save(&ledger.snapshot())
        .await
        .context("Failed to write initial ledger state")?;

    let stats = ledger.stats();
    tracing::info!(
        "✅ Ledger ready: {} users, {} pending requests",
        stats.total_users,
        stats.pending_requests
    );

    let tokens = TokenService::new(config.jwt_secret.clone(), config.token_ttl_hours);
    Ok(AppState::new(ledger, Arc::new(store), tokens))
}

async fn start_server(app: Router, config: &AppConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("🚀 Server starting on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
