//! 404 page (`NotFound` namespace).

use crate::html::escape_html;
use crate::i18n::{locale_path, Locale, TranslationResolver};
use crate::pages::{Page, PageMetadata};

pub const NAMESPACE: &str = "NotFound";

pub async fn render(resolver: &dyn TranslationResolver, locale: Locale) -> Page {
    let t = resolver.resolve(locale, NAMESPACE).await;

    Page {
        metadata: PageMetadata::new(t.get("meta_title"), t.get("meta_description")),
        body: format!(
            "<div class=\"max-w-2xl mx-auto text-center\">\n\
<h1 class=\"text-3xl font-bold mb-6\">404</h1>\n\
<p class=\"text-gray-600\">{}</p>\n\
<p class=\"mt-4\"><a href=\"{}\">{}</a></p>\n\
</div>",
            escape_html(&t.get("message")),
            locale_path(locale, "/"),
            escape_html(&t.get("back_home")),
        ),
    }
}
