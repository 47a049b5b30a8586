//! Integration tests for the marketing site
//!
//! These tests drive the full axum router: locale routing, page rendering,
//! the shared template and the identity seam.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use futures::future::{BoxFuture, FutureExt};
use http_body_util::BodyExt;
use marketing_site::{
    config::{AppConfig, Config},
    i18n::{CatalogResolver, Locale, TranslationResolver, Translations},
    identity::{Anonymous, SessionTokenIdentity},
    server::{create_router, AppState},
};
use std::collections::HashMap;
use tower::ServiceExt;

// ==================== Test Helpers ====================

fn test_config() -> Config {
    Config {
        app: AppConfig {
            name: "Acme".to_string(),
        },
        ..Config::default()
    }
}

fn anonymous_app() -> Router {
    let resolver = CatalogResolver::embedded().expect("embedded catalogs");
    create_router(AppState::new(test_config(), resolver, Anonymous))
}

fn signed_in_app() -> Router {
    let resolver = CatalogResolver::embedded().expect("embedded catalogs");
    let identity = SessionTokenIdentity::parse("tok_1=a@b.com").expect("valid sessions");
    create_router(AppState::new(test_config(), resolver, identity))
}

async fn get(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("request should complete");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
    get(app, Request::get(path).body(Body::empty()).unwrap()).await
}

async fn redirect_location(app: Router, path: &str) -> (StatusCode, String) {
    let request = Request::get(path).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.expect("request should complete");
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (response.status(), location)
}

/// Resolver with no strings at all, to exercise the key-path fallback.
struct EmptyResolver;

impl TranslationResolver for EmptyResolver {
    fn resolve<'a>(&'a self, _locale: Locale, namespace: &'a str) -> BoxFuture<'a, Translations> {
        async move { Translations::empty(namespace) }.boxed()
    }
}

// ==================== Home Page Tests ====================

#[tokio::test]
async fn test_home_default_locale_unprefixed() {
    let (status, body) = get_path(anonymous_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html lang=\"it\">"));
    assert!(body.contains("<title>Benvenuto</title>"));
    assert!(body.contains("Benvenuto in Acme"));
}

#[tokio::test]
async fn test_home_metadata_non_empty_in_every_locale() {
    for locale in Locale::all_enabled() {
        let path = format!("/{}", locale.code());
        let (status, body) = get_path(anonymous_app(), &path).await;
        assert_eq!(status, StatusCode::OK, "status for {}", path);
        assert!(!body.contains("<title></title>"), "empty title for {}", path);
        assert!(!body.contains("content=\"\""), "empty description for {}", path);
    }
}

#[tokio::test]
async fn test_home_english() {
    let (status, body) = get_path(anonymous_app(), "/en").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html lang=\"en\">"));
    assert!(body.contains("<title>Welcome</title>"));
    assert!(body.contains("Your new website, ready in minutes"));
}

// ==================== About / Counter Tests ====================

#[tokio::test]
async fn test_about_body_is_fixed_italian_in_every_locale() {
    for path in ["/about", "/it/about", "/en/about"] {
        let (status, body) = get_path(anonymous_app(), path).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1 class=\"text-3xl font-bold mb-6\">Chi Siamo</h1>"), "{}", path);
    }
}

#[tokio::test]
async fn test_about_metadata_is_translated() {
    let (_, body) = get_path(anonymous_app(), "/en/about").await;
    assert!(body.contains("<title>About</title>"));
}

#[tokio::test]
async fn test_counter_fixed_metadata() {
    let (status, body) = get_path(anonymous_app(), "/en/counter").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Demo Database</title>"));
    assert!(body.contains("in costruzione"));
}

// ==================== Template Tests ====================

#[tokio::test]
async fn test_template_chrome_and_navigation() {
    let (_, body) = get_path(anonymous_app(), "/en/counter").await;
    assert!(body.contains("<h1 class=\"text-3xl font-bold text-gray-900\">Acme</h1>"));
    assert!(body.contains("Acme. Tutti i diritti riservati."));
    assert!(body.contains("<a href=\"/en/about\""));
    // Locale switcher points at the same page in Italian
    assert!(body.contains("<a href=\"/counter\" hreflang=\"it\""));
}

#[tokio::test]
async fn test_missing_translations_fall_back_to_key_path() {
    let app = create_router(AppState::new(test_config(), EmptyResolver, Anonymous));
    let (status, body) = get_path(app, "/about").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>About.meta_title</title>"));
    assert!(body.contains("BaseTemplate.description"));
}

// ==================== Greeting Tests ====================

#[tokio::test]
async fn test_dashboard_without_user_greets_empty_email() {
    let (status, body) = get_path(anonymous_app(), "/en/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>👋 Hello !</p>"));
}

#[tokio::test]
async fn test_dashboard_with_user_greets_email() {
    let request = Request::get("/en/dashboard")
        .header(header::COOKIE, "__session=tok_1")
        .body(Body::empty())
        .unwrap();
    let (status, body) = get(signed_in_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>👋 Hello a@b.com!</p>"));
}

#[tokio::test]
async fn test_dashboard_unknown_session_is_anonymous() {
    let request = Request::get("/dashboard")
        .header(header::AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .unwrap();
    let (status, body) = get(signed_in_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<p>👋 Ciao !</p>"));
}

// ==================== Routing Tests ====================

#[tokio::test]
async fn test_unsupported_locale_is_not_found() {
    let (status, body) = get_path(anonymous_app(), "/fr/about").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Pagina non trovata"));
}

#[tokio::test]
async fn test_unknown_page_is_not_found_in_requested_locale() {
    let (status, body) = get_path(anonymous_app(), "/en/pricing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<html lang=\"en\">"));
    assert!(body.contains("Page not found"));
}

#[tokio::test]
async fn test_deep_unknown_path_is_not_found() {
    let (status, _) = get_path(anonymous_app(), "/a/b/c").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deep_path_under_locale_is_not_found_in_that_locale() {
    let (status, body) = get_path(anonymous_app(), "/en/a/b").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("<html lang=\"en\">"));
}

#[tokio::test]
async fn test_trailing_slash_on_locale_home_redirects() {
    let (status, location) = redirect_location(anonymous_app(), "/en/").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location, "/en");

    let (status, body) = get_path(anonymous_app(), &location).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html lang=\"en\">"));
}

#[tokio::test]
async fn test_trailing_slash_on_page_redirects() {
    let (status, location) = redirect_location(anonymous_app(), "/en/about/").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location, "/en/about");

    let (status, location) = redirect_location(anonymous_app(), "/about/").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location, "/about");
}

#[tokio::test]
async fn test_uppercase_prefix_redirects_to_canonical() {
    let (status, location) = redirect_location(anonymous_app(), "/EN/about").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location, "/en/about");

    let (status, location) = redirect_location(anonymous_app(), "/En").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location, "/en");
}

#[tokio::test]
async fn test_locale_detection_redirects_root() {
    let config = Config {
        locale_detection: true,
        ..test_config()
    };
    let resolver = CatalogResolver::embedded().unwrap();
    let app = create_router(AppState::new(config, resolver, Anonymous));

    let request = Request::get("/")
        .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/en");
}

#[tokio::test]
async fn test_locale_detection_disabled_ignores_header() {
    let request = Request::get("/")
        .header(header::ACCEPT_LANGUAGE, "en")
        .body(Body::empty())
        .unwrap();
    let (status, body) = get(anonymous_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<html lang=\"it\">"));
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_path(anonymous_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["locales"], serde_json::json!(["it", "en"]));
}

// ==================== Catalog Directory Tests ====================

#[tokio::test]
async fn test_catalogs_from_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut it = HashMap::new();
    it.insert("Index", HashMap::from([("meta_title", "Dal disco"), ("meta_description", "Desc")]));
    std::fs::write(dir.path().join("it.json"), serde_json::to_string(&it).unwrap()).unwrap();

    let resolver = CatalogResolver::from_dir(dir.path()).unwrap();
    let app = create_router(AppState::new(test_config(), resolver, Anonymous));
    let (_, body) = get_path(app, "/en").await;
    // English has no file: the default locale's strings are served
    assert!(body.contains("<title>Dal disco</title>"));
}
