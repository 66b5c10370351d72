use axum::{routing::post, Router};

use crate::handlers::requests::{submit_buy, submit_seller_application, submit_withdrawal};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/buy", post(submit_buy))
        .route("/seller", post(submit_seller_application))
        .route("/withdraw", post(submit_withdrawal))
}
