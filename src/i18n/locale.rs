//! Locale type: a locale code validated against the registry.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated, enabled locale.
///
/// Only constructible through `from_code`, `default_locale` or the constants,
/// so every `Locale` in the program refers to a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    code: &'static str,
}

impl Locale {
    pub const ITALIAN: Locale = Locale { code: "it" };
    pub const ENGLISH: Locale = Locale { code: "en" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered and enabled
    /// * `Err` if the code is unknown or the locale is disabled
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The locale served without a path prefix.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All enabled locales, default first.
    pub fn all_enabled() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// # Panics
    /// Never for a `Locale` built through this module's constructors.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be registered")
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
