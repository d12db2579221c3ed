//! Caller identity and role gates.
//!
//! `AuthUser` admits any caller holding a valid token; `RequireAdmin` further
//! restricts to roles that may write. Both reject through [`AppError`], so a
//! refused request never reaches body parsing or storage.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use villa_core::error::CoreError;
use villa_core::roles::Role;
use villa_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// A caller with a valid, unexpired bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: Role,
}

fn unauthorized(reason: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(reason.to_string()))
}

/// The token part of `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?
        .to_str()
        .map_err(|_| unauthorized("Authorization header is not valid ASCII"))?;

    value
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or_else(|| unauthorized("Expected a Bearer token"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let claims = state.config.jwt.verify(token).map_err(|err| {
            tracing::debug!(error = %err, "Rejected bearer token");
            unauthorized("Invalid or expired token")
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

/// An [`AuthUser`] whose role may create, update and delete villa numbers.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.role.can_write() {
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "role '{}' may not modify villa numbers",
                user.role
            ))));
        }
        Ok(RequireAdmin(user))
    }
}
