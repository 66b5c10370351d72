// User-side request submission and history
use axum::{
    extract::{Query, State},
    response::Json,
};
use rust_decimal::Decimal;
use validator::Validate;

use crate::dtos::request_dtos::{
    ApiResponse, BuyCryptoRequest, HistoryQuery, SellerApplicationRequest, WithdrawRequest,
    DEFAULT_COIN,
};
use crate::errors::Result;
use crate::middleware::auth::CurrentUser;
use crate::models::request::{PendingRequest, RequestKind, SELLER_DEPOSIT};
use crate::models::transaction::Transaction;
use crate::state::AppState;

const SUBMITTED: &str = "Request submitted for admin review!";

async fn submit(
    state: &AppState,
    user: Option<CurrentUser>,
    kind: RequestKind,
    amount: Decimal,
    details: String,
) -> Result<Json<ApiResponse<PendingRequest>>> {
    let mut ledger = state.ledger.write().await;
    let request = ledger.submit_request(user.map(|u| u.id), kind, amount, details)?;
    state.persist(&ledger).await?;

    Ok(Json(ApiResponse::ok(SUBMITTED, request)))
}

pub async fn submit_buy(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    Json(payload): Json<BuyCryptoRequest>,
) -> Result<Json<ApiResponse<PendingRequest>>> {
    payload.validate()?;

    let details = payload
        .details
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| {
            let coin = payload.coin.as_deref().unwrap_or(DEFAULT_COIN);
            format!("Buy {} {} via {}", payload.amount, coin, payload.payment_method)
        });

    submit(&state, user, RequestKind::BuyRequest, payload.amount, details).await
}

pub async fn submit_seller_application(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    payload: Option<Json<SellerApplicationRequest>>,
) -> Result<Json<ApiResponse<PendingRequest>>> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    payload.validate()?;

    let details = payload
        .details
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "Seller application".to_string());

    submit(&state, user, RequestKind::SellerApplication, SELLER_DEPOSIT, details).await
}

pub async fn submit_withdrawal(
    State(state): State<AppState>,
    user: Option<CurrentUser>,
    Json(payload): Json<WithdrawRequest>,
) -> Result<Json<ApiResponse<PendingRequest>>> {
    payload.validate()?;

    let details = format!(
        "Withdrawal to {} via {}",
        payload.account_number, payload.payment_method
    );

    submit(&state, user, RequestKind::Withdrawal, payload.amount, details).await
}

pub async fn my_requests(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Json<ApiResponse<Vec<PendingRequest>>> {
    let ledger = state.ledger.read().await;
    let requests = ledger.requests_for(user.id).into_iter().cloned().collect();
    Json(ApiResponse::ok("OK", requests))
}

pub async fn my_transactions(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<HistoryQuery>,
) -> Json<ApiResponse<Vec<Transaction>>> {
    let ledger = state.ledger.read().await;
    let transactions = ledger
        .transactions_for(user.id, query.limit)
        .into_iter()
        .cloned()
        .collect();
    Json(ApiResponse::ok("OK", transactions))
}
