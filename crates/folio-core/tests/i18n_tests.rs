// Host-side tests for language selection and translation lookup.

use folio_core::i18n::{Language, Translator};

#[test]
fn french_is_the_default_language() {
    assert_eq!(Language::default(), Language::Fr);
}

#[test]
fn only_arabic_is_right_to_left() {
    assert!(Language::Ar.is_rtl());
    assert_eq!(Language::Ar.dir(), "rtl");
    for lang in [Language::Fr, Language::En] {
        assert!(!lang.is_rtl());
        assert_eq!(lang.dir(), "ltr");
    }
}

#[test]
fn locale_matching_strips_the_region() {
    assert_eq!(Language::from_locale("en-US"), Language::En);
    assert_eq!(Language::from_locale("fr_FR"), Language::Fr);
    assert_eq!(Language::from_locale("ar"), Language::Ar);
    assert_eq!(Language::from_locale("de-DE"), Language::Fr);
    assert_eq!(Language::from_locale(""), Language::Fr);
}

#[test]
fn tags_round_trip_through_parsing() {
    for lang in Language::ALL {
        assert_eq!(lang.tag().parse::<Language>(), Ok(lang));
    }
    assert!("klingon".parse::<Language>().is_err());
}

#[test]
fn translate_resolves_in_every_language() {
    let t = Translator::new();
    assert_eq!(t.translate(Language::Fr, "nav.home"), "Accueil");
    assert_eq!(t.translate(Language::En, "nav.home"), "Home");
    assert_ne!(t.translate(Language::Ar, "nav.home"), "nav.home");
}

#[test]
fn keys_missing_from_the_active_language_fall_back_to_french() {
    // The shipped tables are kept in sync, so exercise the fallback with a
    // deliberately lopsided set.
    let t = Translator::from_tables(
        &[("nav.home", "Accueil"), ("only.fr", "Seulement en français")],
        &[("nav.home", "Home")],
        &[],
    );
    assert_eq!(t.translate(Language::En, "only.fr"), "Seulement en français");
    assert_eq!(t.translate(Language::Ar, "nav.home"), "Accueil");
    // The active language still wins when it has the key.
    assert_eq!(t.translate(Language::En, "nav.home"), "Home");
    assert!(!t.has(Language::En, "only.fr"));
}

#[test]
fn missing_keys_come_back_verbatim() {
    let t = Translator::new();
    for lang in Language::ALL {
        assert_eq!(t.translate(lang, "no.such.key"), "no.such.key");
    }
}

#[test]
fn every_key_exists_in_every_language() {
    // The tables must stay in sync so the French fallback is never needed
    // for a shipped key.
    let t = Translator::new();
    let keys = [
        "nav.home",
        "nav.about",
        "nav.skills",
        "nav.projects",
        "nav.contact",
        "hero.greeting",
        "hero.name",
        "hero.description",
        "hero.cta",
        "hero.scroll_down",
        "about.title",
        "about.subtitle",
        "about.download_cv",
        "skills.title",
        "projects.title",
        "contact.title",
        "contact.form.name",
        "contact.form.email",
        "contact.form.subject",
        "contact.form.message",
        "contact.form.send",
        "contact.form.sending",
        "contact.form.success",
        "contact.form.error",
        "footer.rights",
        "error.generic",
    ];
    for lang in Language::ALL {
        for key in keys {
            assert!(t.has(lang, key), "{key} missing for {lang}");
        }
    }
}
