use axum::{
    extract::{Path, State},
    response::Json,
};
use validator::Validate;

use crate::dtos::request_dtos::{ApiResponse, ApproveRequest, CreditUserRequest};
use crate::errors::{AppError, Result};
use crate::middleware::auth::AdminUser;
use crate::models::request::{PendingRequest, RequestId};
use crate::models::transaction::Transaction;
use crate::models::user::{UserId, UserResponse};
use crate::services::ledger::LedgerStats;
use crate::state::AppState;

pub async fn stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Json<ApiResponse<LedgerStats>> {
    let stats = state.ledger.read().await.stats();
    Json(ApiResponse::ok("OK", stats))
}

pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Json<ApiResponse<Vec<UserResponse>>> {
    let ledger = state.ledger.read().await;
    let users = ledger.users().iter().map(UserResponse::from).collect();
    Json(ApiResponse::ok("OK", users))
}

pub async fn list_requests(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Json<ApiResponse<Vec<PendingRequest>>> {
    let requests = state.ledger.read().await.requests().to_vec();
    Json(ApiResponse::ok("OK", requests))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Json<ApiResponse<Vec<Transaction>>> {
    let ledger = state.ledger.read().await;
    let transactions = ledger.transactions().into_iter().cloned().collect();
    Json(ApiResponse::ok("OK", transactions))
}

pub async fn approve_request(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<RequestId>,
    payload: Option<Json<ApproveRequest>>,
) -> Result<Json<ApiResponse<Transaction>>> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    let mut ledger = state.ledger.write().await;
    let credit_amount = match payload.credit_amount {
        Some(amount) => amount,
        None => ledger
            .request(id)
            .map(|req| req.kind.default_credit())
            .ok_or(AppError::RequestNotFound(id))?,
    };
    let transaction = ledger.approve_request(id, credit_amount, &admin.name)?;
    state.persist(&ledger).await?;

    Ok(Json(ApiResponse::ok(
        "Request approved and wallet updated!",
        transaction,
    )))
}

pub async fn reject_request(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<RequestId>,
) -> Result<Json<ApiResponse<Transaction>>> {
    let mut ledger = state.ledger.write().await;
    let transaction = ledger.reject_request(id, &admin.name)?;
    state.persist(&ledger).await?;

    Ok(Json(ApiResponse::ok("Request rejected!", transaction)))
}

pub async fn credit_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<UserId>,
    Json(payload): Json<CreditUserRequest>,
) -> Result<Json<ApiResponse<Transaction>>> {
    payload.validate()?;

    let mut ledger = state.ledger.write().await;
    let transaction =
        ledger.admin_credit_user(user_id, payload.amount, payload.notes.trim(), &admin.name)?;
    state.persist(&ledger).await?;

    Ok(Json(ApiResponse::ok(
        format!("Added ${} to user wallet!", transaction.amount),
        transaction,
    )))
}
