//! Brand routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::models::{BrandResponse, CreateBrand};
use crate::repos::BrandRepo;
use crate::state::AppState;

/// POST /brands/add - create a brand listing
async fn create_brand(
    State(state): State<AppState>,
    _session: AuthSession,
    Json(input): Json<CreateBrand>,
) -> Result<(StatusCode, Json<BrandResponse>), ApiError> {
    let brand = input.into_brand()?;
    let brand = BrandRepo::new(state.db()).create(brand).await?;
    Ok((StatusCode::CREATED, Json(BrandResponse::from(brand))))
}

/// GET /brands/fetch - list every brand listing
async fn list_brands(
    State(state): State<AppState>,
    _session: AuthSession,
) -> Result<Json<Vec<BrandResponse>>, ApiError> {
    let brands = BrandRepo::new(state.db()).list_all().await?;
    Ok(Json(brands.into_iter().map(BrandResponse::from).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brands/add", post(create_brand))
        .route("/brands/fetch", get(list_brands))
}
