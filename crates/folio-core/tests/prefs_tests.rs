// Host-side tests for preference loading, persistence and fallbacks.

use folio_core::i18n::Language;
use folio_core::prefs::{
    MemoryStore, PreferenceStore, Preferences, Theme, LANGUAGE_KEY, THEME_KEY,
};

#[test]
fn empty_store_falls_back_to_locale_and_scheme() {
    let store = MemoryStore::default();
    let prefs = Preferences::load(&store, Some("ar-MA"), false);
    assert_eq!(prefs.language, Language::Ar);
    assert_eq!(prefs.theme, Theme::Light);

    let prefs = Preferences::load(&store, None, true);
    assert_eq!(prefs.language, Language::Fr);
    assert_eq!(prefs.theme, Theme::Dark);
}

#[test]
fn stored_values_win_over_fallbacks() {
    let mut store = MemoryStore::default();
    store.set(LANGUAGE_KEY, "en");
    store.set(THEME_KEY, "light");
    let prefs = Preferences::load(&store, Some("ar"), true);
    assert_eq!(prefs.language, Language::En);
    assert_eq!(prefs.theme, Theme::Light);
}

#[test]
fn garbled_stored_values_are_ignored() {
    let mut store = MemoryStore::default();
    store.set(LANGUAGE_KEY, "klingon");
    store.set(THEME_KEY, "sepia");
    let prefs = Preferences::load(&store, Some("en-GB"), true);
    assert_eq!(prefs.language, Language::En);
    assert_eq!(prefs.theme, Theme::Dark);
}

#[test]
fn setters_persist_immediately() {
    let mut store = MemoryStore::default();
    let mut prefs = Preferences::load(&store, None, false);
    prefs.set_language(&mut store, Language::Ar);
    prefs.set_theme(&mut store, Theme::Dark);
    assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("ar"));
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn preferences_round_trip_through_the_store() {
    let mut store = MemoryStore::default();
    let mut prefs = Preferences::load(&store, None, false);
    prefs.set_language(&mut store, Language::Ar);
    prefs.set_theme(&mut store, Theme::Light);

    let reloaded = Preferences::load(&store, Some("en"), true);
    assert_eq!(reloaded, prefs);
    assert!(reloaded.language.is_rtl());
}

#[test]
fn toggle_theme_flips_and_persists() {
    let mut store = MemoryStore::default();
    let mut prefs = Preferences::load(&store, None, true);
    assert_eq!(prefs.theme, Theme::Dark);
    assert_eq!(prefs.toggle_theme(&mut store), Theme::Light);
    assert_eq!(prefs.theme, Theme::Light);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(prefs.toggle_theme(&mut store), Theme::Dark);
}

#[test]
fn theme_carries_its_document_attributes() {
    assert_eq!(Theme::Light.class_name(), "light");
    assert_eq!(Theme::Dark.class_name(), "dark");
    assert_eq!(Theme::Light.meta_color(), "#ffffff");
    assert_eq!(Theme::Dark.meta_color(), "#000000");
}
