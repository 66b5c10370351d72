use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::errors::{AppError, Result};
use crate::models::user::{Claims, User};

/// Issues and checks the bearer tokens that identify the acting user.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl_hours: i64) -> Self {
        TokenService {
            secret: secret.into(),
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn issue(&self, user: &User) -> Result<String> {
        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            role: user.role,
            exp: (Utc::now() + self.ttl).timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_ref()),
        )?)
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_ref()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            tracing::debug!("Rejected bearer token: {}", e);
            AppError::Unauthenticated
        })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::{UserRole, UserStatus};
    use rust_decimal::Decimal;

    fn admin() -> User {
        User {
            id: 4,
            name: "Admin User".to_string(),
            email: "admin@axcrypto.com".to_string(),
            mobile: "01612345678".to_string(),
            wallet: Decimal::ZERO,
            role: UserRole::Admin,
            status: UserStatus::Active,
            password_hash: String::new(),
            member_since: "Jan 2023".to_string(),
        }
    }

    #[test]
    fn issued_token_verifies() {
        let tokens = TokenService::new("test-secret", 1);
        let token = tokens.issue(&admin()).unwrap();

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, 4);
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(claims.name, "Admin User");
    }

    #[test]
    fn foreign_secret_is_unauthenticated() {
        let token = TokenService::new("one", 1).issue(&admin()).unwrap();
        assert!(matches!(
            TokenService::new("two", 1).verify(&token),
            Err(AppError::Unauthenticated)
        ));
    }

    #[test]
    fn expired_token_is_unauthenticated() {
        let tokens = TokenService::new("test-secret", -2);
        let token = tokens.issue(&admin()).unwrap();
        assert!(matches!(tokens.verify(&token), Err(AppError::Unauthenticated)));
    }
}
