//! Translated strings for one namespace.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::warn;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// The key→string mapping a resolver returns for one `(locale, namespace)`.
///
/// Lookups never fail. A missing key resolves to `"Namespace.key"` and is
/// logged, so an incomplete catalog shows up in the page and in the logs
/// instead of breaking the render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translations {
    namespace: String,
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn new(namespace: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries,
        }
    }

    /// An empty mapping; every lookup falls back to `"Namespace.key"`.
    pub fn empty(namespace: impl Into<String>) -> Self {
        Self::new(namespace, HashMap::new())
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `key`, falling back to `"Namespace.key"`.
    pub fn get(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(value) => value.clone(),
            None => {
                warn!(namespace = %self.namespace, key, "Missing translation key");
                format!("{}.{}", self.namespace, key)
            }
        }
    }

    /// Look up `key` and substitute `{name}` placeholders from `args`.
    ///
    /// Placeholders without a matching argument are left untouched.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.get(key), args)
    }

    /// Keys present in `self` that are missing from `other`.
    pub fn missing_from(&self, other: &Translations) -> Vec<String> {
        let mut missing: Vec<String> = self
            .entries
            .keys()
            .filter(|key| !other.contains(key))
            .cloned()
            .collect();
        missing.sort();
        missing
    }

    /// Fill keys missing from `self` with the values in `fallback`.
    pub(crate) fn merge_fallback(&mut self, fallback: &Translations) {
        for (key, value) in &fallback.entries {
            self.entries
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
}

/// Substitute `{name}` placeholders in `template` from `args`.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let regex = PLACEHOLDER_REGEX
        .get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder regex is valid"));

    regex
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
