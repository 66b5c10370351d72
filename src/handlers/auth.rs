use axum::{extract::State, response::Json};
use validator::Validate;

use crate::dtos::auth_dtos::{LoginRequest, RegisterRequest};
use crate::dtos::request_dtos::ApiResponse;
use crate::errors::{AppError, Result};
use crate::middleware::auth::CurrentUser;
use crate::models::user::{AuthResponse, UserResponse};
use crate::services::ledger::Registration;
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>> {
    payload.validate()?;

    let form = Registration {
        name: payload.name.trim(),
        email: payload.email.trim(),
        mobile: payload.mobile.trim(),
        password: &payload.password,
        confirm_password: &payload.confirm_password,
    };

    // Hash outside the ledger lock, on a blocking thread
    let hasher = {
        let ledger = state.ledger.read().await;
        ledger.check_registration(&form)?;
        ledger.hasher()
    };
    let password = payload.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

    let mut ledger = state.ledger.write().await;
    let user = ledger.register_user(form, password_hash)?;
    state.persist(&ledger).await?;
    drop(ledger);

    let token = state.tokens.issue(&user)?;

    Ok(Json(ApiResponse::ok(
        "Account created successfully!",
        AuthResponse {
            user: UserResponse::from(&user),
            token,
        },
    )))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>> {
    payload.validate()?;

    let user = state
        .ledger
        .read()
        .await
        .authenticate(payload.identifier.trim(), &payload.password)?;

    let token = state.tokens.issue(&user)?;
    tracing::info!("🔑 {} logged in", user.email);

    Ok(Json(ApiResponse::ok(
        format!("Welcome back, {}!", user.name),
        AuthResponse {
            user: UserResponse::from(&user),
            token,
        },
    )))
}

// Tokens are stateless; the client discards its copy
pub async fn logout(user: CurrentUser) -> Json<ApiResponse<()>> {
    tracing::info!("User {} logged out", user.id);
    Json(ApiResponse::ok("Logged out successfully", ()))
}

pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>> {
    let ledger = state.ledger.read().await;
    let current = ledger.user(user.id).ok_or(AppError::UserNotFound(user.id))?;
    Ok(Json(ApiResponse::ok("OK", UserResponse::from(current))))
}
