use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::user::UserId;

pub type RequestId = u64;

/// Nominal security deposit carried by every seller application.
pub const SELLER_DEPOSIT: Decimal = Decimal::from_parts(150_000, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    SellerApplication,
    BuyRequest,
    Withdrawal,
}

impl RequestKind {
    /// Human wording used in transaction notes ("seller application").
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::SellerApplication => "seller application",
            RequestKind::BuyRequest => "buy request",
            RequestKind::Withdrawal => "withdrawal",
        }
    }

    /// Credit applied when an admin approves without naming an amount.
    pub fn default_credit(&self) -> Decimal {
        match self {
            RequestKind::SellerApplication => Decimal::TEN,
            RequestKind::BuyRequest | RequestKind::Withdrawal => Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequest {
    pub id: RequestId,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub kind: RequestKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: RequestStatus,
    pub details: String,
    pub submitted_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn seller_deposit_is_150k() {
        assert_eq!(SELLER_DEPOSIT, dec!(150000));
    }

    #[test]
    fn wire_shape_matches_record_layout() {
        let req = PendingRequest {
            id: 1,
            user_id: 3,
            kind: RequestKind::SellerApplication,
            amount: dec!(150000),
            status: RequestStatus::Pending,
            details: "docs".to_string(),
            submitted_at: "2024-01-25 10:30:00".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "seller_application");
        assert_eq!(json["userId"], 3);
        assert_eq!(json["status"], "pending");
        assert_eq!(json["submittedAt"], "2024-01-25 10:30:00");
    }

    #[test]
    fn quick_approval_credits() {
        assert_eq!(RequestKind::SellerApplication.default_credit(), dec!(10));
        assert_eq!(RequestKind::BuyRequest.default_credit(), Decimal::ZERO);
        assert_eq!(RequestKind::Withdrawal.default_credit(), Decimal::ZERO);
    }

    #[test]
    fn labels_replace_underscores() {
        assert_eq!(RequestKind::BuyRequest.label(), "buy request");
        assert_eq!(RequestKind::Withdrawal.label(), "withdrawal");
    }
}
