//! Generative-model proxy routes
//!
//! Stateless request/response wrappers: no retries, no caching, upstream
//! failures surface as errors.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use sponsorlink_core::genai::{ContractTerms, ListingCopy};

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::models::validation::required;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Serialize)]
pub struct ContractResponse {
    pub contract: String,
}

/// POST /gemini - generate listing title and description for a topic
async fn generate_listing_copy(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(request): Json<PromptRequest>,
) -> Result<Json<ListingCopy>, ApiError> {
    required("prompt", &request.prompt)?;

    let copy = state.genai().generate_listing_copy(&request.prompt).await?;
    Ok(Json(copy))
}

/// POST /contract - generate long-form contract text
///
/// The generated legal content is returned verbatim and not validated.
async fn generate_contract(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(terms): Json<ContractTerms>,
) -> Result<Json<ContractResponse>, ApiError> {
    required("brandName", &terms.brand_name)?;
    required("influencerName", &terms.influencer_name)?;
    required("campaignDetails", &terms.campaign_details)?;
    required("compensation", &terms.compensation)?;
    required("duration", &terms.duration)?;

    let contract = state.genai().generate_contract(&terms).await?;
    Ok(Json(ContractResponse { contract }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gemini", post(generate_listing_copy))
        .route("/contract", post(generate_contract))
}
