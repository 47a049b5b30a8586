//! Dashboard page: the greeting for the current user.

use crate::components::greeting;
use crate::pages::{Page, PageContext, PageMetadata};

pub async fn render(ctx: &PageContext<'_>) -> Page {
    let (t, user) = futures::join!(
        ctx.translations.resolve(ctx.locale, greeting::NAMESPACE),
        ctx.identity.current_user(ctx.headers)
    );

    Page {
        metadata: PageMetadata::new(t.get("meta_title"), t.get("meta_description")),
        body: format!(
            "<div class=\"max-w-2xl mx-auto\">\n{}\n</div>",
            greeting::render(&t, user.as_ref())
        ),
    }
}
