use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::admin;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(admin::stats))
        .route("/users", get(admin::list_users))
        .route("/users/:id/credit", post(admin::credit_user))
        .route("/requests", get(admin::list_requests))
        .route("/requests/:id/approve", post(admin::approve_request))
        .route("/requests/:id/reject", post(admin::reject_request))
        .route("/transactions", get(admin::list_transactions))
}
