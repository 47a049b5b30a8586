//! Locale negotiation and locale-aware link building.

use crate::i18n::Locale;

/// Pick a locale from an `Accept-Language` header value.
///
/// Resolution order:
/// 1. Highest-weighted tag whose primary subtag is an enabled locale
/// 2. The default locale
///
/// Tags with `q=0` are ignored. Malformed weights count as `q=1`.
///
/// # Example
///
/// ```
/// use marketing_site::i18n::{negotiate, Locale};
///
/// assert_eq!(negotiate(Some("en-US,en;q=0.9")), Locale::ENGLISH);
/// assert_eq!(negotiate(Some("fr-FR")), Locale::ITALIAN);
/// assert_eq!(negotiate(None), Locale::ITALIAN);
/// ```
pub fn negotiate(accept_language: Option<&str>) -> Locale {
    let Some(header) = accept_language else {
        return Locale::default_locale();
    };

    let mut candidates: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';').map(str::trim);
            let tag = parts.next().filter(|tag| !tag.is_empty())?;
            let weight = parts
                .find_map(|param| param.strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((tag, weight))
        })
        .filter(|(_, weight)| *weight > 0.0)
        .collect();

    // Stable sort keeps header order among equal weights
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    candidates
        .into_iter()
        .find_map(|(tag, _)| {
            let primary = tag.split('-').next().unwrap_or(tag);
            Locale::from_code(primary).ok()
        })
        .unwrap_or_else(Locale::default_locale)
}

/// Build a link to `path` for `locale`.
///
/// The default locale is served without a prefix; every other locale is
/// prefixed with its code (`/en/about`).
pub fn locale_path(locale: Locale, path: &str) -> String {
    if locale.is_default() {
        return path.to_string();
    }

    match path {
        "" | "/" => format!("/{}", locale.code()),
        _ => format!("/{}{}", locale.code(), path),
    }
}
