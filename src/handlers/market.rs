use axum::{extract::State, response::Json};

use crate::dtos::request_dtos::ApiResponse;
use crate::models::market::{CoinPrice, PaymentMethod, PAYMENT_METHODS};
use crate::state::AppState;

pub async fn get_prices(State(state): State<AppState>) -> Json<ApiResponse<Vec<CoinPrice>>> {
    Json(ApiResponse::ok("OK", state.prices.snapshot().await))
}

pub async fn get_payment_methods() -> Json<ApiResponse<&'static [PaymentMethod]>> {
    Json(ApiResponse::ok("OK", &PAYMENT_METHODS[..]))
}
