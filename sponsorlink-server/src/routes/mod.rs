//! Route handlers
//!
//! Organized by resource:
//! - brands: brand deal listings
//! - applications: sponsorship applications
//! - generate: generative-model proxies (listing copy, contracts)
//! - verify: business email verification
//! - health: health check endpoint

pub mod applications;
pub mod brands;
pub mod generate;
pub mod health;
pub mod verify;

use axum::Router;

use crate::state::AppState;

/// Everything mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(brands::router())
        .merge(applications::router())
        .merge(generate::router())
        .merge(verify::router())
}
