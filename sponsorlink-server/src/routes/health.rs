//! Health check route

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// GET /health - liveness plus a database ping
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state
        .db()
        .run_command(bson::doc! { "ping": 1 })
        .await
        .map_err(ApiError::Database)?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database: "connected",
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
