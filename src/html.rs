//! HTML escaping and the document shell every page is served in.

use crate::i18n::Locale;
use crate::pages::PageMetadata;

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

/// A complete HTML document: head metadata plus already-rendered body markup.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub locale: Locale,
    pub metadata: &'a PageMetadata,
    pub body: &'a str,
}

impl Document<'_> {
    pub fn render(&self) -> String {
        format!(
            "<!DOCTYPE html>\n\
<html lang=\"{lang}\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n\
<meta name=\"description\" content=\"{description}\">\n\
</head>\n\
<body class=\"min-h-screen bg-white text-gray-900\">\n\
{body}\n\
</body>\n\
</html>\n",
            lang = self.locale.code(),
            title = escape_html(&self.metadata.title),
            description = escape_html(&self.metadata.description),
            body = self.body,
        )
    }
}
