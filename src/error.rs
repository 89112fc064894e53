//! Error types shared across the service.
//!
//! `I18nError` covers configuration problems in the locale and message
//! tables; these are raised at startup. `ApiError` is what request handlers
//! return, and renders as a `400` JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("unsupported locale: '{0}'")]
    UnsupportedLocale(String),

    #[error("missing template for key '{key}' in locale '{locale}'")]
    MissingTemplate { locale: String, key: String },

    #[error("invalid message catalog: {0}")]
    InvalidCatalog(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{title} ({} violations)", .errors.len())]
    Validation {
        title: String,
        errors: Vec<FieldError>,
    },

    #[error("{title}: {detail}")]
    MalformedBody { title: String, detail: String },
}

#[derive(Debug, Serialize)]
struct ValidationBody<'a> {
    title: &'a str,
    status: u16,
    errors: &'a [FieldError],
}

#[derive(Debug, Serialize)]
struct MalformedBody<'a> {
    title: &'a str,
    status: u16,
    detail: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        match &self {
            ApiError::Validation { title, errors } => (
                status,
                Json(ValidationBody {
                    title,
                    status: status.as_u16(),
                    errors,
                }),
            )
                .into_response(),
            ApiError::MalformedBody { title, detail } => (
                status,
                Json(MalformedBody {
                    title,
                    status: status.as_u16(),
                    detail,
                }),
            )
                .into_response(),
        }
    }
}
