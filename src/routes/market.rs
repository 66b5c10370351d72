use axum::{routing::get, Router};

use crate::handlers::market::{get_payment_methods, get_prices};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/prices", get(get_prices))
        .route("/payment-methods", get(get_payment_methods))
}
