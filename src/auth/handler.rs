use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use tracing::{debug, info};

use crate::auth::{validate, LoginRequest};
use crate::error::ApiError;
use crate::i18n::{Locale, Localize, MessageKey};
use crate::server::{AppState, RequestLocale};

/// `POST /Auth/login`
///
/// Responds with the localized success message as plain text, or a `400`
/// listing every validation failure.
pub async fn login(
    State(state): State<AppState>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    let localizer = state.localizer.as_ref();

    let Json(request) = body.map_err(|rejection| {
        info!("Rejected login body ({}): {}", locale, rejection.body_text());
        ApiError::MalformedBody {
            title: localizer.localize(locale, MessageKey::ErrorInvalidBody, &[]),
            detail: rejection.body_text(),
        }
    })?;

    login_message(localizer, locale, &request)
}

/// Validate `request` and render the success message in `locale`.
pub fn login_message(
    localizer: &dyn Localize,
    locale: Locale,
    request: &LoginRequest,
) -> Result<String, ApiError> {
    let errors = validate(request, locale, localizer);
    if !errors.is_empty() {
        info!(
            "Rejected login ({}): {} validation error(s)",
            locale,
            errors.len()
        );
        for error in &errors {
            debug!("  {}: {}", error.field.as_str(), error.rule.message_key());
        }
        return Err(ApiError::Validation {
            title: localizer.localize(locale, MessageKey::TitleValidation, &[]),
            errors,
        });
    }

    info!("Login accepted ({})", locale);
    Ok(localizer.localize(locale, MessageKey::MessageUserLoggedin, &[request.email.as_str()]))
}
