//! Greeting for the current user (`Dashboard` namespace).

use crate::html::escape_html;
use crate::i18n::Translations;
use crate::identity::UserRecord;

pub const NAMESPACE: &str = "Dashboard";

const READY_BANNER: &str = "<div class=\"mt-6 p-4 bg-blue-50 rounded-lg border border-blue-200\">\n\
<p class=\"text-blue-800 text-sm\">🚀 Il tuo progetto è ora pronto per essere personalizzato!</p>\n\
</div>";

/// The greeting line: `👋 ` plus `hello_message` with the user's email.
///
/// No user, or a user without a primary email, greets with an empty email.
pub fn greeting_text(translations: &Translations, user: Option<&UserRecord>) -> String {
    let email = user.and_then(UserRecord::primary_email).unwrap_or("");
    format!("👋 {}", translations.format("hello_message", &[("email", email)]))
}

/// Greeting markup for an already-resolved namespace and user.
pub fn render(translations: &Translations, user: Option<&UserRecord>) -> String {
    format!(
        "<p>{}</p>\n{}",
        escape_html(&greeting_text(translations, user)),
        READY_BANNER
    )
}
