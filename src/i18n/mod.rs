//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `locale`: Type-safe `Locale` validated against the registry
//! - `negotiate`: `Accept-Language` negotiation and locale-prefixed links
//! - `translations`: Strings of one namespace, with `{placeholder}` interpolation
//! - `resolver`: The `TranslationResolver` seam pages depend on
//! - `catalog`: JSON catalog implementation of the resolver
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{CatalogResolver, Locale, TranslationResolver};
//!
//! let resolver = CatalogResolver::embedded()?;
//! let index = resolver.resolve(Locale::ENGLISH, "Index").await;
//! let title = index.get("meta_title");
//! ```

mod catalog;
mod locale;
mod negotiate;
mod registry;
mod resolver;
mod translations;

pub use catalog::{CatalogError, CatalogResolver, MissingKey};
pub use locale::Locale;
pub use negotiate::{locale_path, negotiate};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::TranslationResolver;
pub use translations::{interpolate, Translations};
