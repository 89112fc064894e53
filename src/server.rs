//! HTTP surface: router, shared state, and per-request locale negotiation.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE, COOKIE};
use axum::http::{HeaderMap, HeaderValue, Uri};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use cookie::Cookie;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::auth;
use crate::i18n::{Locale, Localize};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub localizer: Arc<dyn Localize>,
}

impl AppState {
    pub fn new(localizer: impl Localize + 'static) -> Self {
        Self {
            localizer: Arc::new(localizer),
        }
    }
}

/// The locale negotiated for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

/// Name of the cookie that pins a culture across requests.
pub const CULTURE_COOKIE: &str = ".AspNetCore.Culture";

/// Locale hints collected from one request, before matching.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct LocaleHints {
    query_ui_culture: Option<String>,
    query_culture: Option<String>,
    cookie_ui_culture: Option<String>,
    cookie_culture: Option<String>,
    accept_language: Option<String>,
}

impl LocaleHints {
    fn from_parts(uri: &Uri, headers: &HeaderMap) -> Self {
        let mut hints = Self::default();

        // First value wins when a parameter repeats
        if let Some(query) = uri.query() {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                let slot = match &*key {
                    "ui-culture" => &mut hints.query_ui_culture,
                    "culture" => &mut hints.query_culture,
                    _ => continue,
                };
                if slot.is_none() {
                    *slot = Some(value.into_owned());
                }
            }
        }

        if let Some(value) = culture_cookie(headers) {
            let (culture, ui_culture) = parse_culture_cookie(&value);
            hints.cookie_culture = culture;
            hints.cookie_ui_culture = ui_culture;
        }

        hints.accept_language = headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        hints
    }

    /// Hints in priority order. The UI culture selects message text, so it
    /// comes before the plain culture from the same source.
    fn ordered(&self) -> [Option<&str>; 5] {
        [
            self.query_ui_culture.as_deref(),
            self.query_culture.as_deref(),
            self.cookie_ui_culture.as_deref(),
            self.cookie_culture.as_deref(),
            self.accept_language.as_deref(),
        ]
    }
}

/// Decoded value of the culture cookie, if the request carries one.
fn culture_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse_encoded)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == CULTURE_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Parse a culture cookie value of the form `c=ru|uic=ru`.
///
/// Returns `(culture, ui_culture)`. When only one half is present it is
/// used for both.
fn parse_culture_cookie(value: &str) -> (Option<String>, Option<String>) {
    let mut culture = None;
    let mut ui_culture = None;

    for part in value.split('|') {
        let part = part.trim();
        if let Some(code) = part.strip_prefix("uic=") {
            ui_culture = Some(code.to_string()).filter(|code| !code.is_empty());
        } else if let Some(code) = part.strip_prefix("c=") {
            culture = Some(code.to_string()).filter(|code| !code.is_empty());
        }
    }

    (
        culture.clone().or_else(|| ui_culture.clone()),
        ui_culture.or(culture),
    )
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/Auth/login", post(auth::login))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            negotiate_locale,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Resolve the request locale and attach it as [`RequestLocale`].
///
/// Sources in priority order: `ui-culture` then `culture` query parameters,
/// the UI culture then culture from the `.AspNetCore.Culture` cookie, and
/// finally `Accept-Language`. The first one naming a supported locale wins;
/// otherwise the default is used. The chosen code is echoed in
/// `Content-Language`.
async fn negotiate_locale(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let hints = LocaleHints::from_parts(req.uri(), req.headers());
    let locale = state.localizer.resolve_first(&hints.ordered());
    debug!(
        "Negotiated locale {} for {} from {:?}",
        locale,
        req.uri().path(),
        hints
    );

    req.extensions_mut().insert(RequestLocale(locale));
    let mut response = next.run(req).await;
    response
        .headers_mut()
        .insert(CONTENT_LANGUAGE, HeaderValue::from_static(locale.code()));
    response
}

/// Serve on `listener` until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr().context("Failed to read listener address")?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localizer;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Localizer::with_default("en").unwrap()))
    }

    fn login_request(uri: &str, accept_language: Option<&str>, body: &str) -> Request<Body> {
        login_request_with_cookie(uri, accept_language, None, body)
    }

    fn login_request_with_cookie(
        uri: &str,
        accept_language: Option<&str>,
        cookie: Option<&str>,
        body: &str,
    ) -> Request<Body> {
        let mut builder = Request::post(uri).header("content-type", "application/json");
        if let Some(value) = accept_language {
            builder = builder.header("accept-language", value);
        }
        if let Some(value) = cookie {
            builder = builder.header("cookie", value);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn hints_for(uri: &str, cookie: Option<&str>) -> LocaleHints {
        let uri: Uri = uri.parse().unwrap();
        let mut headers = HeaderMap::new();
        if let Some(value) = cookie {
            headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        }
        LocaleHints::from_parts(&uri, &headers)
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const VALID_BODY: &str = r#"{"email":"user@test.com","password":"abcd1234"}"#;

    // ==================== Culture Cookie Tests ====================

    #[test]
    fn test_parse_culture_cookie_both_halves() {
        assert_eq!(
            parse_culture_cookie("c=ru|uic=ru"),
            (Some("ru".to_string()), Some("ru".to_string()))
        );
        assert_eq!(
            parse_culture_cookie("uic=en|c=ru"),
            (Some("ru".to_string()), Some("en".to_string()))
        );
    }

    #[test]
    fn test_parse_culture_cookie_single_half_used_for_both() {
        assert_eq!(
            parse_culture_cookie("c=ru"),
            (Some("ru".to_string()), Some("ru".to_string()))
        );
        assert_eq!(
            parse_culture_cookie("uic=en"),
            (Some("en".to_string()), Some("en".to_string()))
        );
    }

    #[test]
    fn test_parse_culture_cookie_garbage() {
        assert_eq!(parse_culture_cookie(""), (None, None));
        assert_eq!(parse_culture_cookie("ru"), (None, None));
        assert_eq!(parse_culture_cookie("c=|uic="), (None, None));
    }

    #[test]
    fn test_culture_cookie_is_percent_decoded() {
        let hints = hints_for(
            "/Auth/login",
            Some("theme=dark; .AspNetCore.Culture=c%3Dru%7Cuic%3Den"),
        );
        assert_eq!(hints.cookie_culture.as_deref(), Some("ru"));
        assert_eq!(hints.cookie_ui_culture.as_deref(), Some("en"));
    }

    // ==================== Query Hint Tests ====================

    #[test]
    fn test_repeated_query_param_first_value_wins() {
        let hints = hints_for("/Auth/login?culture=ru&culture=en", None);
        assert_eq!(hints.query_culture.as_deref(), Some("ru"));
        assert_eq!(hints.query_ui_culture, None);
    }

    #[test]
    fn test_ordered_puts_ui_culture_first() {
        let hints = hints_for(
            "/Auth/login?culture=en&ui-culture=ru",
            Some(".AspNetCore.Culture=c=en|uic=ru"),
        );
        assert_eq!(
            hints.ordered(),
            [Some("ru"), Some("en"), Some("ru"), Some("en"), None]
        );
    }

    // ==================== Negotiation Tests ====================

    #[tokio::test]
    async fn test_default_locale_without_hints() {
        let response = app()
            .oneshot(login_request("/Auth/login", None, VALID_BODY))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "en");
        assert_eq!(
            body_text(response).await,
            "User user@test.com has logged in successfully"
        );
    }

    #[tokio::test]
    async fn test_accept_language_selects_russian() {
        let response = app()
            .oneshot(login_request("/Auth/login", Some("ru-RU,ru;q=0.9,en;q=0.8"), VALID_BODY))
            .await
            .unwrap();

        assert_eq!(response.headers()[CONTENT_LANGUAGE], "ru");
        assert_eq!(
            body_text(response).await,
            "Пользователь user@test.com успешно вошёл в систему"
        );
    }

    #[tokio::test]
    async fn test_culture_query_overrides_header() {
        let response = app()
            .oneshot(login_request("/Auth/login?culture=en", Some("ru"), VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "en");
    }

    #[tokio::test]
    async fn test_ui_culture_query_is_used() {
        let response = app()
            .oneshot(login_request("/Auth/login?ui-culture=ru", None, VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "ru");
    }

    #[tokio::test]
    async fn test_unsupported_query_falls_through_to_header() {
        let response = app()
            .oneshot(login_request("/Auth/login?culture=fr", Some("ru"), VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "ru");
    }

    #[tokio::test]
    async fn test_unsupported_everything_uses_default() {
        let response = app()
            .oneshot(login_request("/Auth/login?culture=fr", Some("de-DE"), VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "en");
    }

    #[tokio::test]
    async fn test_ui_culture_wins_over_culture() {
        let response = app()
            .oneshot(login_request("/Auth/login?culture=en&ui-culture=ru", None, VALID_BODY))
            .await
            .unwrap();

        assert_eq!(response.headers()[CONTENT_LANGUAGE], "ru");
        assert_eq!(
            body_text(response).await,
            "Пользователь user@test.com успешно вошёл в систему"
        );
    }

    #[tokio::test]
    async fn test_repeated_culture_param_still_negotiates() {
        let response = app()
            .oneshot(login_request("/Auth/login?culture=ru&culture=ru", None, VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "ru");
    }

    #[tokio::test]
    async fn test_culture_cookie_selects_russian() {
        for cookie in [
            ".AspNetCore.Culture=c%3Dru%7Cuic%3Dru",
            ".AspNetCore.Culture=c=ru|uic=ru",
        ] {
            let response = app()
                .oneshot(login_request_with_cookie("/Auth/login", None, Some(cookie), VALID_BODY))
                .await
                .unwrap();
            assert_eq!(response.headers()[CONTENT_LANGUAGE], "ru", "cookie: {}", cookie);
        }
    }

    #[tokio::test]
    async fn test_culture_cookie_overrides_header() {
        let response = app()
            .oneshot(login_request_with_cookie(
                "/Auth/login",
                Some("en"),
                Some(".AspNetCore.Culture=c=ru|uic=ru"),
                VALID_BODY,
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "ru");
    }

    #[tokio::test]
    async fn test_query_overrides_culture_cookie() {
        let response = app()
            .oneshot(login_request_with_cookie(
                "/Auth/login?culture=en",
                None,
                Some(".AspNetCore.Culture=c=ru|uic=ru"),
                VALID_BODY,
            ))
            .await
            .unwrap();
        assert_eq!(response.headers()[CONTENT_LANGUAGE], "en");
    }

    // ==================== Routing Tests ====================

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(login_request("/Auth/logout", None, VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let request = Request::get("/Auth/login").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
