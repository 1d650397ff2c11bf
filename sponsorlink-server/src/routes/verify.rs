//! Business email verification route

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyEmailRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize)]
pub struct VerifyEmailResponse {
    pub verified: bool,
    pub email: String,
}

/// POST /verify-business-email - MX-record gate for an email's domain
///
/// Pure yes/no check; the caller records the result, nothing is persisted
/// here. Input validation (missing/malformed address) happens before any
/// DNS lookup.
async fn verify_business_email(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(request): Json<VerifyEmailRequest>,
) -> Result<Json<VerifyEmailResponse>, ApiError> {
    state.verifier().verify(&request.email).await?;

    Ok(Json(VerifyEmailResponse {
        verified: true,
        email: request.email,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/verify-business-email", post(verify_business_email))
}
