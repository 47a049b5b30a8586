//! The translation source seam.

use crate::i18n::{Locale, Translations};
use futures::future::BoxFuture;

/// Resolves the strings of one namespace for one locale.
///
/// Implementations own their fallback behaviour: `resolve` is infallible and
/// must always hand back a usable `Translations`, even if it is empty.
pub trait TranslationResolver: Send + Sync {
    fn resolve<'a>(&'a self, locale: Locale, namespace: &'a str) -> BoxFuture<'a, Translations>;
}
