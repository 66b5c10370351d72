// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please login first!")]
    Unauthenticated,

    #[error("Admin access required")]
    Forbidden,

    #[error("User already exists!")]
    DuplicateUser,

    #[error("Invalid credentials!")]
    InvalidCredentials,

    #[error("Account inactive. Contact support.")]
    AccountInactive,

    #[error("Request {0} not found")]
    RequestNotFound(u64),

    #[error("User {0} not found")]
    UserNotFound(u64),

    #[error("Passwords mismatch!")]
    PasswordMismatch,

    #[error("Insufficient balance!")]
    InsufficientBalance,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::DuplicateUser => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::AccountInactive => StatusCode::FORBIDDEN,
            AppError::RequestNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::PasswordMismatch => StatusCode::BAD_REQUEST,
            AppError::InsufficientBalance => StatusCode::BAD_REQUEST,
            AppError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::PasswordHash(_)
            | AppError::Token(_)
            | AppError::Storage(_)
            | AppError::Serialization(_)
            | AppError::ConfigurationError(_)
            | AppError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated => "unauthenticated",
            AppError::Forbidden => "forbidden",
            AppError::DuplicateUser => "duplicate_user",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::AccountInactive => "account_inactive",
            AppError::RequestNotFound(_) => "request_not_found",
            AppError::UserNotFound(_) => "user_not_found",
            AppError::PasswordMismatch => "password_mismatch",
            AppError::InsufficientBalance => "insufficient_balance",
            AppError::InvalidAmount(_) => "invalid_amount",
            AppError::ValidationError(_) => "validation_error",
            AppError::PasswordHash(_) => "password_hash_error",
            AppError::Token(_) => "token_error",
            AppError::Storage(_) => "storage_error",
            AppError::Serialization(_) => "serialization_error",
            AppError::ConfigurationError(_) => "configuration_error",
            AppError::Task(_) => "task_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal failures keep their detail in the log, not the body
        let message = if status.is_server_error() {
            tracing::error!("❌ {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": self.code(),
            "message": message,
            "success": false,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        AppError::InvalidAmount(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::ConfigurationError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
