//! Database demo placeholder. Fixed copy, no persistence.

use crate::pages::PageMetadata;

pub fn metadata() -> PageMetadata {
    PageMetadata::new("Demo Database", "Pagina demo per testare il database")
}

pub fn body() -> String {
    "<div class=\"max-w-2xl mx-auto\">\n\
<h1 class=\"text-3xl font-bold mb-6\">Demo Database</h1>\n\
<div class=\"bg-yellow-50 border border-yellow-200 rounded-lg p-6\">\n\
<p class=\"text-yellow-800\">🚧 Questa pagina è in costruzione</p>\n\
<p class=\"text-yellow-700 mt-2 text-sm\">Puoi usare questa sezione per testare il database o trasformarla in qualcosa di utile per il tuo progetto.</p>\n\
</div>\n\
</div>"
        .to_string()
}
