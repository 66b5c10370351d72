pub mod account;
pub mod admin;
pub mod auth;
pub mod market;
pub mod requests;

use axum::{extract::State, http::Method, middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::auth::auth_middleware;
use crate::state::AppState;

pub fn build_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check))
        .nest("/api/auth", auth::routes())
        .nest("/api/me", account::routes())
        .nest("/api/requests", requests::routes())
        .nest("/api/admin", admin::routes())
        .nest("/api/market", market::routes())
        .layer(middleware::from_fn_with_state(app_state.clone(), auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

async fn root_handler() -> &'static str {
    "🚀 AX Crypto P2P Exchange API"
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let stats = state.ledger.read().await.stats();

    Json(json!({
        "status": "healthy",
        "users": stats.total_users,
        "pending_requests": stats.pending_requests,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
