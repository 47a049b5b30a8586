//! Landing page (`Index` namespace).

use crate::config::AppConfig;
use crate::html::escape_html;
use crate::i18n::{Locale, TranslationResolver};
use crate::pages::PageMetadata;

pub const NAMESPACE: &str = "Index";

struct FeatureCard {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        icon: "🚀",
        title: "Axum",
        text: "Routing asincrono, estrattori tipizzati e performance ottimizzate",
    },
    FeatureCard {
        icon: "🎨",
        title: "Template condiviso",
        text: "Intestazione, navigazione e piè di pagina comuni a tutte le pagine",
    },
    FeatureCard {
        icon: "⚡",
        title: "Rust",
        text: "Type safety e developer experience superiore",
    },
];

pub async fn metadata(resolver: &dyn TranslationResolver, locale: Locale) -> PageMetadata {
    let t = resolver.resolve(locale, NAMESPACE).await;
    PageMetadata::new(t.get("meta_title"), t.get("meta_description"))
}

pub fn body(app: &AppConfig) -> String {
    let cards: Vec<String> = FEATURE_CARDS
        .iter()
        .map(|card| {
            format!(
                "<div class=\"p-6 bg-white border border-gray-200 rounded-xl shadow-sm\">\n\
<div class=\"text-2xl mb-3\">{}</div>\n\
<h3 class=\"font-semibold text-gray-900 mb-2\">{}</h3>\n\
<p class=\"text-sm text-gray-600\">{}</p>\n\
</div>",
                card.icon, card.title, card.text
            )
        })
        .collect();

    format!(
        "<div class=\"min-h-[60vh] flex items-center justify-center\">\n\
<div class=\"text-center max-w-3xl mx-auto px-4\">\n\
<h1 class=\"text-5xl font-bold mb-6\">Benvenuto in {app_name}</h1>\n\
<p class=\"text-xl text-gray-600 mb-8 leading-relaxed\">Il tuo nuovo progetto è pronto. <br>Costruito con le migliori tecnologie moderne.</p>\n\
<div class=\"grid grid-cols-1 md:grid-cols-3 gap-6 mt-12\">\n{cards}\n</div>\n\
<div class=\"mt-12 pt-8 border-t border-gray-100\">\n\
<p class=\"text-sm text-gray-500\">🔒 Autenticazione • 🗃️ Database • 🌍 i18n • 🧪 Testing • 📊 Analytics</p>\n\
<p class=\"text-xs text-gray-400 mt-2\">Tutto pre-configurato e pronto per la produzione</p>\n\
</div>\n\
</div>\n\
</div>",
        app_name = escape_html(&app.name),
        cards = cards.join("\n"),
    )
}
