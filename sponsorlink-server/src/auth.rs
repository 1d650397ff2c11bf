//! Session extraction and authorization checks
//!
//! Identity comes exclusively from the `Authorization: Bearer` token,
//! verified against the server's session key. Handlers never read a
//! caller-supplied identity field from the request body.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use sponsorlink_core::session::{Session, SessionError};

use crate::error::ApiError;
use crate::state::AppState;

/// A verified caller session extracted from the bearer token.
pub struct AuthSession(pub Session);

impl AuthSession {
    /// Admin-only routes.
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.0.is_admin() {
            Ok(())
        } else {
            Err(ApiError::Forbidden {
                reason: "admin role required",
            })
        }
    }

    /// Owner-or-admin routes (e.g. updating an application).
    pub fn require_owner_or_admin(&self, owner_id: &str) -> Result<(), ApiError> {
        if self.0.is_admin() || self.0.user_id == owner_id {
            Ok(())
        } else {
            Err(ApiError::Forbidden {
                reason: "not the owner of this resource",
            })
        }
    }
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::from(SessionError::Missing))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::from(SessionError::Malformed))?;

        let session = state.sessions().verify(token)?;
        Ok(Self(session))
    }
}
