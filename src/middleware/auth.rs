use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::errors::{AppError, Result};
use crate::models::user::{Claims, UserId, UserRole};
use crate::state::AppState;

/// The acting user, as identified by the bearer token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub name: String,
    pub role: UserRole,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        CurrentUser {
            id: claims.sub,
            name: claims.name,
            role: claims.role,
        }
    }
}

/// Same as [`CurrentUser`] but only admits the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub CurrentUser);

/// Decodes `Authorization: Bearer <token>` into a [`CurrentUser`]. Requests
/// without a usable token pass through anonymous, so public routes ignore
/// stale or foreign credentials. Protected routes refuse them through the
/// extractors below.
pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(value) = headers.get(AUTHORIZATION) {
        let claims = value
            .to_str()
            .ok()
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthenticated)
            .and_then(|token| state.tokens.verify(token));

        match claims {
            Ok(claims) => {
                request.extensions_mut().insert(CurrentUser::from(claims));
            }
            Err(_) => tracing::debug!("Ignoring unusable authorization header"),
        }
    }

    next.run(request).await
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthenticated)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let user = CurrentUser::from_request_parts(parts, state).await?;
        if user.role != UserRole::Admin {
            return Err(AppError::Forbidden);
        }
        Ok(AdminUser(user))
    }
}
