//! Shared page chrome: header, navigation, footer.

use crate::config::AppConfig;
use crate::html::escape_html;
use crate::i18n::{locale_path, Locale, Translations};
use crate::pages::Route;

/// One navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Site path built by `locale_path`; written into the markup as-is.
    pub href: String,
    pub label: String,
    /// Set on locale switcher entries so the link carries `hreflang`
    pub hreflang: Option<&'static str>,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            hreflang: None,
        }
    }

    fn render(&self) -> String {
        let hreflang = self
            .hreflang
            .map(|lang| format!(" hreflang=\"{}\"", lang))
            .unwrap_or_default();
        format!(
            "<li><a href=\"{}\"{} class=\"border-none text-gray-700 hover:text-gray-900\">{}</a></li>",
            self.href,
            hreflang,
            escape_html(&self.label)
        )
    }
}

/// Header/footer chrome around page content.
#[derive(Debug, Clone)]
pub struct BaseTemplate<'a> {
    pub app: &'a AppConfig,
    /// Translated `BaseTemplate.description` tagline
    pub description: String,
    /// Copyright year shown in the footer
    pub year: i32,
}

impl<'a> BaseTemplate<'a> {
    pub fn new(app: &'a AppConfig, translations: &Translations, year: i32) -> Self {
        Self {
            app,
            description: translations.get("description"),
            year,
        }
    }

    pub fn wrap(&self, left_nav: &[NavLink], right_nav: &[NavLink], children: &str) -> String {
        let app_name = escape_html(&self.app.name);

        let mut nav = String::new();
        if !left_nav.is_empty() || !right_nav.is_empty() {
            nav.push_str("<nav class=\"flex justify-between\">\n");
            nav.push_str(&render_nav_list(left_nav, "flex flex-wrap gap-x-5 text-xl"));
            if !right_nav.is_empty() {
                nav.push_str(&render_nav_list(right_nav, "flex flex-wrap gap-x-5 text-xl"));
            }
            nav.push_str("</nav>\n");
        }

        format!(
            "<div class=\"w-full px-1 text-gray-700 antialiased\">\n\
<div class=\"mx-auto max-w-screen-md\">\n\
<header class=\"text-center py-8\">\n\
<h1 class=\"text-3xl font-bold text-gray-900\">{app_name}</h1>\n\
<h2 class=\"text-lg text-gray-600 mt-2\">{description}</h2>\n\
</header>\n\
{nav}\
<main>{children}</main>\n\
<footer class=\"border-t border-gray-300 py-8 text-center text-sm text-gray-500\">\n\
<p>© {year} {app_name}. Tutti i diritti riservati.</p>\n\
<p class=\"mt-2 text-xs\">Costruito con Rust, Axum e Tokio</p>\n\
</footer>\n\
</div>\n\
</div>",
            app_name = app_name,
            description = escape_html(&self.description),
            nav = nav,
            children = children,
            year = self.year,
        )
    }
}

fn render_nav_list(links: &[NavLink], class: &str) -> String {
    let items: Vec<String> = links.iter().map(NavLink::render).collect();
    format!("<ul class=\"{}\">\n{}\n</ul>\n", class, items.join("\n"))
}

/// Left navigation of the marketing pages, labelled from `RootLayout`.
pub fn marketing_nav(locale: Locale, translations: &Translations) -> Vec<NavLink> {
    Route::NAVIGABLE
        .iter()
        .map(|route| {
            NavLink::new(
                locale_path(locale, route.path()),
                translations.get(route.nav_label_key()),
            )
        })
        .collect()
}

/// Links to `route` in every enabled locale other than `current`.
pub fn locale_switcher(current: Locale, route: Route) -> Vec<NavLink> {
    Locale::all_enabled()
        .into_iter()
        .filter(|locale| *locale != current)
        .map(|locale| NavLink {
            href: locale_path(locale, route.path()),
            label: locale.native_name().to_string(),
            hreflang: Some(locale.code()),
        })
        .collect()
}
