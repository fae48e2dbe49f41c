//! `localStorage`-backed preferences plus the document-level side effects
//! of applying them (text direction, language tag, theme class).
//!
//! Storage being blocked or absent degrades to in-memory defaults; nothing
//! here is allowed to fail the app.

use folio_core::i18n::{Language, Translator};
use folio_core::prefs::{PreferenceStore, Preferences, Theme};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct LocalStore {
    storage: web::Storage,
}

impl LocalStore {
    pub fn open(window: &web::Window) -> Option<Self> {
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            _ => {
                log::warn!("localStorage unavailable; preferences will not persist");
                None
            }
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.storage.set_item(key, value).is_err() {
            log::warn!("failed to persist preference {key}");
        }
    }
}

/// Browser locale, e.g. "fr-FR".
pub fn browser_locale(window: &web::Window) -> Option<String> {
    window.navigator().language()
}

/// OS-level dark-mode preference.
pub fn prefers_dark(window: &web::Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Set the document `dir`/`lang` attributes for `language`.
pub fn apply_language(document: &web::Document, language: Language) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("dir", language.dir());
        let _ = root.set_attribute("lang", language.tag());
    }
}

/// Swap the theme class on the document root and keep the mobile theme
/// color in sync.
pub fn apply_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let _ = classes.remove_2(Theme::Light.class_name(), Theme::Dark.class_name());
        let _ = classes.add_1(theme.class_name());
    }
    if let Ok(Some(meta)) = document.query_selector("meta[name=\"theme-color\"]") {
        let _ = meta.set_attribute("content", theme.meta_color());
    }
}

/// Re-resolve every `data-i18n` element against the active language.
pub fn apply_translations(
    document: &web::Document,
    translator: &Translator,
    language: Language,
) {
    let Ok(nodes) = document.query_selector_all("[data-i18n]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let Ok(el) = node.dyn_into::<web::Element>() else {
            continue;
        };
        if let Some(key) = el.get_attribute("data-i18n") {
            el.set_text_content(Some(translator.translate(language, &key)));
        }
    }
}

/// Apply all document side effects for the current preferences in one go.
pub fn apply_preferences(document: &web::Document, translator: &Translator, prefs: &Preferences) {
    apply_language(document, prefs.language);
    apply_theme(document, prefs.theme);
    apply_translations(document, translator, prefs.language);
}
