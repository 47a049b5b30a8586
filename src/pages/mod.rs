//! Page renderers.
//!
//! Each page produces head metadata and body markup for one locale. Pages
//! never fail: missing strings come back through the resolver's fallbacks.

pub mod about;
pub mod counter;
pub mod dashboard;
pub mod home;
pub mod not_found;

use crate::config::AppConfig;
use crate::i18n::{Locale, TranslationResolver};
use crate::identity::IdentityProvider;
use axum::http::HeaderMap;

/// Head metadata of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A rendered page, before the shared template is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub metadata: PageMetadata,
    pub body: String,
}

/// The routable pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Counter,
    Dashboard,
}

impl Route {
    /// Routes listed in the marketing navigation, in display order.
    pub const NAVIGABLE: [Route; 4] = [Route::Home, Route::About, Route::Counter, Route::Dashboard];

    /// Path of the route without a locale prefix.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Counter => "/counter",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Parse the path segment that follows the locale prefix.
    ///
    /// Home has no segment of its own; it is served at the bare prefix.
    pub fn from_segment(segment: &str) -> Option<Route> {
        match segment {
            "about" => Some(Route::About),
            "counter" => Some(Route::Counter),
            "dashboard" => Some(Route::Dashboard),
            _ => None,
        }
    }

    /// `RootLayout` key labelling this route in the navigation.
    pub fn nav_label_key(&self) -> &'static str {
        match self {
            Route::Home => "home_link",
            Route::About => "about_link",
            Route::Counter => "counter_link",
            Route::Dashboard => "dashboard_link",
        }
    }
}

/// Everything a page may read while rendering one request.
pub struct PageContext<'a> {
    pub locale: Locale,
    pub app: &'a AppConfig,
    pub translations: &'a dyn TranslationResolver,
    pub identity: &'a dyn IdentityProvider,
    pub headers: &'a HeaderMap,
}

/// Render `route` for the request described by `ctx`.
pub async fn render_page(route: Route, ctx: &PageContext<'_>) -> Page {
    match route {
        Route::Home => Page {
            metadata: home::metadata(ctx.translations, ctx.locale).await,
            body: home::body(ctx.app),
        },
        Route::About => Page {
            metadata: about::metadata(ctx.translations, ctx.locale).await,
            body: about::body(),
        },
        Route::Counter => Page {
            metadata: counter::metadata(),
            body: counter::body(),
        },
        Route::Dashboard => dashboard::render(ctx).await,
    }
}
