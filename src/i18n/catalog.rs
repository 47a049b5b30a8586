//! JSON message catalogs.
//!
//! One document per locale. Top-level keys are namespaces; nested objects
//! inside a namespace flatten into dotted keys:
//!
//! ```json
//! { "Index": { "meta_title": "Home", "hero": { "title": "Hi" } } }
//! ```
//!
//! yields namespace `Index` with keys `meta_title` and `hero.title`.

use crate::i18n::{Locale, TranslationResolver, Translations};
use futures::future::{BoxFuture, FutureExt};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const EMBEDDED_CATALOGS: &[(&str, &str)] = &[
    ("it", include_str!("../../messages/it.json")),
    ("en", include_str!("../../messages/en.json")),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog for locale '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog for locale '{0}' must be a JSON object of namespaces")]
    NotAnObject(String),

    #[error("no catalog for default locale '{0}'")]
    MissingDefault(String),
}

/// A key present in the default locale but absent from another locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKey {
    pub locale: Locale,
    pub namespace: String,
    pub key: String,
}

/// In-process translation resolver backed by parsed catalogs.
#[derive(Debug, Clone, Default)]
pub struct CatalogResolver {
    catalogs: HashMap<Locale, HashMap<String, Translations>>,
}

impl CatalogResolver {
    /// Catalogs compiled into the binary from `messages/`.
    pub fn embedded() -> Result<Self, CatalogError> {
        let mut resolver = Self::default();
        for (code, source) in EMBEDDED_CATALOGS {
            let Ok(locale) = Locale::from_code(code) else {
                debug!(locale = code, "Skipping embedded catalog for disabled locale");
                continue;
            };
            resolver.insert_json(locale, source)?;
        }
        resolver.ensure_default()?;
        Ok(resolver)
    }

    /// Load `{code}.json` for every enabled locale from `dir`.
    ///
    /// A missing file is tolerated for non-default locales; those resolve
    /// entirely through the default locale.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut resolver = Self::default();

        for locale in Locale::all_enabled() {
            let path = dir.join(format!("{}.json", locale.code()));
            match std::fs::read_to_string(&path) {
                Ok(source) => {
                    resolver.insert_json(locale, &source)?;
                    info!(locale = %locale, path = %path.display(), "Loaded message catalog");
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound && !locale.is_default() => {
                    warn!(locale = %locale, path = %path.display(), "No message catalog, using default locale");
                }
                Err(source) => return Err(CatalogError::Io { path, source }),
            }
        }

        resolver.ensure_default()?;
        Ok(resolver)
    }

    /// Parse one catalog document and register it for `locale`.
    pub fn insert_json(&mut self, locale: Locale, source: &str) -> Result<(), CatalogError> {
        let document: Value = serde_json::from_str(source).map_err(|source| CatalogError::Parse {
            locale: locale.code().to_string(),
            source,
        })?;

        let Value::Object(namespaces) = document else {
            return Err(CatalogError::NotAnObject(locale.code().to_string()));
        };

        let mut parsed = HashMap::new();
        for (namespace, value) in namespaces {
            match value {
                Value::Object(map) => {
                    let mut entries = HashMap::new();
                    flatten_into(&mut entries, None, &map);
                    parsed.insert(namespace.clone(), Translations::new(namespace, entries));
                }
                _ => warn!(locale = %locale, namespace = %namespace, "Ignoring non-object namespace"),
            }
        }

        self.catalogs.insert(locale, parsed);
        Ok(())
    }

    fn ensure_default(&self) -> Result<(), CatalogError> {
        let default = Locale::default_locale();
        if self.catalogs.contains_key(&default) {
            Ok(())
        } else {
            Err(CatalogError::MissingDefault(default.code().to_string()))
        }
    }

    fn lookup(&self, locale: Locale, namespace: &str) -> Option<&Translations> {
        self.catalogs.get(&locale)?.get(namespace)
    }

    /// Resolve synchronously: the locale's namespace with gaps filled from
    /// the default locale.
    pub fn resolve_now(&self, locale: Locale, namespace: &str) -> Translations {
        let mut translations = self
            .lookup(locale, namespace)
            .cloned()
            .unwrap_or_else(|| Translations::empty(namespace));

        let default = Locale::default_locale();
        if locale != default {
            if let Some(fallback) = self.lookup(default, namespace) {
                translations.merge_fallback(fallback);
            }
        }

        translations
    }

    /// Keys defined for the default locale that other locales lack.
    pub fn missing_keys(&self) -> Vec<MissingKey> {
        let default = Locale::default_locale();
        let Some(reference) = self.catalogs.get(&default) else {
            return Vec::new();
        };

        let mut missing = Vec::new();
        for locale in Locale::all_enabled().into_iter().filter(|l| *l != default) {
            let mut namespaces: Vec<_> = reference.iter().collect();
            namespaces.sort_by(|a, b| a.0.cmp(b.0));

            for (namespace, expected) in namespaces {
                let actual = self
                    .lookup(locale, namespace)
                    .cloned()
                    .unwrap_or_else(|| Translations::empty(namespace.as_str()));
                missing.extend(expected.missing_from(&actual).into_iter().map(|key| MissingKey {
                    locale,
                    namespace: namespace.clone(),
                    key,
                }));
            }
        }
        missing
    }
}

impl TranslationResolver for CatalogResolver {
    fn resolve<'a>(&'a self, locale: Locale, namespace: &'a str) -> BoxFuture<'a, Translations> {
        async move { self.resolve_now(locale, namespace) }.boxed()
    }
}

fn flatten_into(entries: &mut HashMap<String, String>, prefix: Option<&str>, map: &Map<String, Value>) {
    for (key, value) in map {
        let full_key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            Value::String(text) => {
                entries.insert(full_key, text.clone());
            }
            Value::Object(nested) => flatten_into(entries, Some(&full_key), nested),
            Value::Null => {}
            other => {
                entries.insert(full_key, other.to_string());
            }
        }
    }
}
