//! About page. Metadata is translated; the body copy is fixed.

use crate::i18n::{Locale, TranslationResolver};
use crate::pages::PageMetadata;

pub const NAMESPACE: &str = "About";

const BODY: &str = "<div class=\"max-w-4xl mx-auto\">\n\
<h1 class=\"text-3xl font-bold mb-6\">Chi Siamo</h1>\n\
<div class=\"prose prose-gray max-w-none\">\n\
<p class=\"text-lg text-gray-600 mb-4\">Inserisci qui la storia del tuo progetto, la tua missione e i tuoi valori.</p>\n\
<p class=\"text-gray-600\">Questa sezione può contenere informazioni su di te, il tuo team, la vostra esperienza e cosa vi rende unici.</p>\n\
</div>\n\
</div>";

pub async fn metadata(resolver: &dyn TranslationResolver, locale: Locale) -> PageMetadata {
    let t = resolver.resolve(locale, NAMESPACE).await;
    PageMetadata::new(t.get("meta_title"), t.get("meta_description"))
}

pub fn body() -> String {
    BODY.to_string()
}
