use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Deserialize, Validate)]
pub struct BuyCryptoRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,

    /// USDT or BTC; USDT when absent.
    #[serde(default)]
    #[validate(custom(function = "validate_coin"))]
    pub coin: Option<String>,

    #[serde(default)]
    pub details: Option<String>,
}

pub const DEFAULT_COIN: &str = "USDT";
pub const BUYABLE_COINS: [&str; 2] = ["USDT", "BTC"];

fn validate_coin(coin: &str) -> Result<(), ValidationError> {
    if BUYABLE_COINS.contains(&coin) {
        Ok(())
    } else {
        Err(ValidationError::new("coin").with_message("Coin must be USDT or BTC".into()))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SellerApplicationRequest {
    #[serde(default)]
    #[validate(length(max = 1000, message = "Details are too long"))]
    pub details: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct WithdrawRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    #[validate(length(min = 1, message = "Payment method is required"))]
    pub payment_method: String,

    #[validate(length(min = 1, message = "Account number is required"))]
    pub account_number: String,
}

/// Omitting `credit_amount` (or the whole body) approves with the
/// request kind's default credit.
#[derive(Debug, Default, Deserialize)]
pub struct ApproveRequest {
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub credit_amount: Option<Decimal>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreditUserRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    #[serde(default)]
    #[validate(length(max = 500, message = "Notes are too long"))]
    pub notes: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// Acknowledgment envelope returned by every successful call.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data,
        }
    }
}
