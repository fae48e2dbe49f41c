//! Last-resort error surface.
//!
//! When init fails the app root is replaced with a generic "please
//! refresh" notice instead of leaving a half-wired page; the cause only
//! goes to the console.

use crate::dom;
use folio_core::i18n::{Language, Translator};

pub fn show_error_notice(translator: &Translator, language: Language) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(root) = document.get_element_by_id("app") else {
        return;
    };
    let message = translator.translate(language, "error.generic");
    root.set_inner_html(&format!(
        "<div class=\"error-notice\"><h2>{message}</h2></div>"
    ));
}
