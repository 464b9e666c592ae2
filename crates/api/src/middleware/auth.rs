//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use portal_core::error::CoreError;
use portal_core::types::DbId;
use portal_submission::Requester;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Requester extracted from a JWT Bearer token in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The requester's id (from `claims.sub`).
    pub user_id: DbId,
    /// The portal the requester acts for, if the token names one.
    pub portal_id: Option<DbId>,
}

impl AuthUser {
    /// Resolve the caller into a [`Requester`], failing with
    /// `PortalMissing` when the token carries no portal.
    pub fn requester(&self) -> Result<Requester, AppError> {
        Ok(Requester::resolve(Some(self.user_id), self.portal_id)?)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            portal_id: claims.portal_id,
        })
    }
}
