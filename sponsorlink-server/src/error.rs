//! API error types with IntoResponse
//!
//! Every repository and proxy error is caught at the request boundary and
//! mapped to a JSON body plus status code. Internal details (database,
//! upstream) are logged and replaced with a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use sponsorlink_core::email::VerifyError;
use sponsorlink_core::genai::GenAiError;
use sponsorlink_core::session::SessionError;

use crate::models::ValidationError;
use crate::repos::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(String),

    /// Email domain could not be verified (400)
    DomainUnverified(String),

    /// Missing or invalid session token (401)
    Unauthorized(String),

    /// Valid session, insufficient rights (403)
    Forbidden { reason: &'static str },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Database error (500, logged)
    Database(mongodb::error::Error),

    /// External dependency failed (500, logged)
    Upstream(String),

    /// External response was not parseable (500, logged)
    Format(String),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "validation_error", "message": message }),
            ),
            Self::DomainUnverified(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "domain_unverified", "message": message }),
            ),
            Self::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": "unauthorized", "message": message }),
            ),
            Self::Forbidden { reason } => (
                StatusCode::FORBIDDEN,
                json!({ "error": "forbidden", "message": reason }),
            ),
            Self::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                }),
            ),
            Self::Database(err) => {
                tracing::error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal_error", "message": "an internal error occurred" }),
                )
            }
            Self::Upstream(message) => {
                tracing::error!("upstream error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "upstream_error", "message": "an external service failed" }),
                )
            }
            Self::Format(message) => {
                tracing::error!("format error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "format_error",
                        "message": "an external service returned an unexpected response"
                    }),
                )
            }
            Self::Internal { message } => {
                tracing::error!("internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal_error", "message": "an internal error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::Mongo(err) => Self::Database(err),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        Self::Unauthorized(err.to_string())
    }
}

impl From<GenAiError> for ApiError {
    fn from(err: GenAiError) -> Self {
        match err {
            GenAiError::Format { reason } => Self::Format(reason),
            GenAiError::EmptyResponse => Self::Format(err.to_string()),
            GenAiError::Upstream(_) => Self::Upstream(err.to_string()),
            GenAiError::MissingKey => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}

impl From<VerifyError> for ApiError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::MissingEmail | VerifyError::InvalidAddress(_) => {
                Self::Validation(err.to_string())
            }
            VerifyError::NoMxRecords(_) => Self::DomainUnverified(err.to_string()),
            VerifyError::Resolver(_) => Self::Upstream(err.to_string()),
        }
    }
}
