//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is built once on first access through `OnceLock` and is
//! immutable thereafter.

use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 locale code (e.g., "it", "en")
    pub code: &'static str,

    /// English name of the locale (e.g., "Italian", "English")
    pub name: &'static str,

    /// Native name of the locale, shown in the locale switcher
    pub native_name: &'static str,

    /// Whether this locale is served without a path prefix (only one should be true)
    pub is_default: bool,

    /// Whether this locale is enabled for use
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: default_locales(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// Codes are matched case-insensitively, so `"EN"` finds `"en"`.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales
            .iter()
            .find(|locale| locale.code.eq_ignore_ascii_case(code))
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get the default locale configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one default locale.
    /// This is a programming error in `default_locales`.
    pub fn default_locale(&self) -> &LocaleConfig {
        let defaults: Vec<_> = self
            .locales
            .iter()
            .filter(|locale| locale.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default locale found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default locales found in registry"),
        }
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Italian is the default locale; English is served under `/en`.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
            enabled: true,
        },
    ]
}
