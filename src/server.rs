//! HTTP surface: locale-aware routing onto the page renderers.
//!
//! The default locale is served unprefixed (`/about`) and under its own
//! prefix (`/it/about`); every other locale only under its prefix.

use crate::config::Config;
use crate::html::Document;
use crate::i18n::{locale_path, negotiate, Locale, TranslationResolver};
use crate::identity::IdentityProvider;
use crate::pages::{self, not_found, Page, PageContext, Route};
use crate::template::{locale_switcher, marketing_nav, BaseTemplate, NavLink};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::Datelike;
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translations: Arc<dyn TranslationResolver>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(
        config: Config,
        translations: impl TranslationResolver + 'static,
        identity: impl IdentityProvider + 'static,
    ) -> Self {
        Self {
            config: Arc::new(config),
            translations: Arc::new(translations),
            identity: Arc::new(identity),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    locales: Vec<&'static str>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .route("/about", get(about))
        .route("/counter", get(counter))
        .route("/dashboard", get(dashboard))
        .route("/:locale", get(localized_home))
        .route("/:locale/", get(trailing_slash))
        .route("/:locale/:page", get(localized_page))
        .route("/:locale/:page/", get(trailing_slash))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        locales: Locale::all_enabled().iter().map(Locale::code).collect(),
    })
}

async fn root(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if state.config.locale_detection {
        let accept = headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());
        let locale = negotiate(accept);
        if !locale.is_default() {
            debug!(locale = %locale, "Redirecting to negotiated locale");
            return Redirect::temporary(&locale_path(locale, "/")).into_response();
        }
    }

    Html(render_route(&state, Locale::default_locale(), Route::Home, &headers).await).into_response()
}

async fn about(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    Html(render_route(&state, Locale::default_locale(), Route::About, &headers).await)
}

async fn counter(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    Html(render_route(&state, Locale::default_locale(), Route::Counter, &headers).await)
}

async fn dashboard(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    Html(render_route(&state, Locale::default_locale(), Route::Dashboard, &headers).await)
}

/// Locale named by the first path segment.
///
/// Prefixes are canonical only in their registry spelling (`en`, not `EN`).
enum Prefix {
    Exact(Locale),
    NonCanonical(Locale),
    Unknown,
}

fn parse_prefix(segment: &str) -> Prefix {
    match Locale::from_code(segment) {
        Ok(locale) if locale.code() == segment => Prefix::Exact(locale),
        Ok(locale) => Prefix::NonCanonical(locale),
        Err(_) => Prefix::Unknown,
    }
}

async fn localized_home(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    headers: HeaderMap,
) -> Response {
    match parse_prefix(&segment) {
        Prefix::Exact(locale) => {
            Html(render_route(&state, locale, Route::Home, &headers).await).into_response()
        }
        Prefix::NonCanonical(locale) => Redirect::permanent(&format!("/{}", locale.code())).into_response(),
        Prefix::Unknown => {
            debug!(locale = %segment, "Unsupported locale prefix");
            render_not_found(&state, Locale::default_locale()).await
        }
    }
}

async fn localized_page(
    State(state): State<AppState>,
    Path((segment, page)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let locale = match parse_prefix(&segment) {
        Prefix::Exact(locale) => locale,
        Prefix::NonCanonical(locale) => {
            return Redirect::permanent(&format!("/{}/{}", locale.code(), page)).into_response();
        }
        Prefix::Unknown => {
            debug!(locale = %segment, "Unsupported locale prefix");
            return render_not_found(&state, Locale::default_locale()).await;
        }
    };

    match Route::from_segment(&page) {
        Some(route) => Html(render_route(&state, locale, route, &headers).await).into_response(),
        None => render_not_found(&state, locale).await,
    }
}

/// Redirect `/en/` and `/en/about/` to their canonical slash-less form.
async fn trailing_slash(uri: Uri) -> Redirect {
    let path = uri.path().trim_end_matches('/');
    Redirect::permanent(if path.is_empty() { "/" } else { path })
}

/// 404 for any other path, in the locale of its first segment when that
/// segment is a canonical locale prefix.
async fn fallback(State(state): State<AppState>, uri: Uri) -> Response {
    let first = uri.path().trim_start_matches('/').split('/').next().unwrap_or("");
    let locale = match parse_prefix(first) {
        Prefix::Exact(locale) => locale,
        _ => Locale::default_locale(),
    };
    render_not_found(&state, locale).await
}

/// Render `route` inside the marketing layout as a full document.
pub async fn render_route(state: &AppState, locale: Locale, route: Route, headers: &HeaderMap) -> String {
    let ctx = PageContext {
        locale,
        app: &state.config.app,
        translations: state.translations.as_ref(),
        identity: state.identity.as_ref(),
        headers,
    };

    let (page, chrome, layout) = futures::join!(
        pages::render_page(route, &ctx),
        state.translations.resolve(locale, "BaseTemplate"),
        state.translations.resolve(locale, "RootLayout"),
    );

    info!(locale = %locale, route = route.path(), "Rendered page");

    let left = marketing_nav(locale, &layout);
    let right = locale_switcher(locale, route);
    let template = BaseTemplate::new(&state.config.app, &chrome, current_year());
    render_document(locale, &page, &template, &left, &right)
}

async fn render_not_found(state: &AppState, locale: Locale) -> Response {
    let (page, chrome, layout) = futures::join!(
        not_found::render(state.translations.as_ref(), locale),
        state.translations.resolve(locale, "BaseTemplate"),
        state.translations.resolve(locale, "RootLayout"),
    );

    let left = marketing_nav(locale, &layout);
    let template = BaseTemplate::new(&state.config.app, &chrome, current_year());
    let html = render_document(locale, &page, &template, &left, &[]);
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}

fn render_document(
    locale: Locale,
    page: &Page,
    template: &BaseTemplate<'_>,
    left: &[NavLink],
    right: &[NavLink],
) -> String {
    let body = template.wrap(left, right, &page.body);
    Document {
        locale,
        metadata: &page.metadata,
        body: &body,
    }
    .render()
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}
