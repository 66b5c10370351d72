use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type UserId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub wallet: Decimal,
    pub role: UserRole,
    pub status: UserStatus,
    pub password_hash: String,
    pub member_since: String,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// "Jan 2024" style label shown on profiles.
    pub fn member_since_label(at: DateTime<Utc>) -> String {
        at.format("%b %Y").to_string()
    }
}

// Client-facing view, never carries the credential hash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub wallet: Decimal,
    pub role: UserRole,
    pub status: UserStatus,
    pub member_since: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            mobile: user.mobile.clone(),
            wallet: user.wallet,
            role: user.role,
            status: user.status,
            member_since: user.member_since.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: UserId,
    pub name: String,
    pub role: UserRole,
    pub exp: usize,
}
