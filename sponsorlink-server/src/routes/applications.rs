//! Application routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use bson::oid::ObjectId;
use serde::Deserialize;

use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::models::{ApplicationResponse, CreateApplication, UpdateApplication, ValidationError};
use crate::repos::ApplicationRepo;
use crate::state::AppState;

/// Partial update request. The target id rides in the body; merge fields
/// absent from the request are left unchanged.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationRequest {
    pub application_id: String,
    #[serde(flatten)]
    pub fields: UpdateApplication,
}

/// POST /application/add - submit an application for a brand deal
///
/// The applicant identity comes from the session; the brand name snapshot is
/// resolved server-side.
async fn create_application(
    State(state): State<AppState>,
    session: AuthSession,
    Json(input): Json<CreateApplication>,
) -> Result<(StatusCode, Json<ApplicationResponse>), ApiError> {
    let brand_id = input.validate()?;
    let (application, brand) = ApplicationRepo::new(state.db())
        .create(&session.0.user_id, brand_id, input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::resolved(application, brand)),
    ))
}

/// POST /application/user - list the caller's applications, brands resolved
async fn list_own_applications(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
    let resolved = ApplicationRepo::new(state.db())
        .list_by_user(&session.0.user_id)
        .await?;

    Ok(Json(
        resolved
            .into_iter()
            .map(|(app, brand)| ApplicationResponse::resolved(app, brand))
            .collect(),
    ))
}

/// PUT /application/user - partial status/contact update
///
/// Admins may update any application; other callers only their own.
async fn update_application(
    State(state): State<AppState>,
    session: AuthSession,
    Json(request): Json<UpdateApplicationRequest>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let id = ObjectId::parse_str(&request.application_id).map_err(|_| {
        ApiError::from(ValidationError::InvalidFormat {
            field: "applicationId",
            reason: "not a valid object id",
        })
    })?;
    let update = request.fields.to_update_document()?;

    let repo = ApplicationRepo::new(state.db());
    let existing = repo.get(id).await?;
    session.require_owner_or_admin(&existing.user_id)?;

    let (application, brand) = repo.update(id, update).await?;
    Ok(Json(ApplicationResponse::resolved(application, brand)))
}

/// GET /application/fetchAll - every application, admin only
async fn list_all_applications(
    State(state): State<AppState>,
    session: AuthSession,
) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
    session.require_admin()?;

    let resolved = ApplicationRepo::new(state.db()).list_all().await?;
    Ok(Json(
        resolved
            .into_iter()
            .map(|(app, brand)| ApplicationResponse::resolved(app, brand))
            .collect(),
    ))
}

pub fn router() -> Router<AppState> {
    use axum::routing::post;

    Router::new()
        .route("/application/add", post(create_application))
        .route(
            "/application/user",
            post(list_own_applications).put(update_application),
        )
        .route("/application/fetchAll", get(list_all_applications))
}
