use axum::{routing::get, Router};

use crate::handlers::auth::me;
use crate::handlers::requests::{my_requests, my_transactions};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(me))
        // GET /api/me/transactions?limit=5 - latest wallet history
        .route("/transactions", get(my_transactions))
        .route("/requests", get(my_requests))
}
