//! Persisted user preferences: interface language and color theme.
//!
//! Persistence goes through the [`PreferenceStore`] trait so the web
//! frontend can plug in `localStorage` while tests use an in-memory map.
//! Reads degrade silently: a missing or garbled stored value is replaced by
//! a computed default, never surfaced as an error.

use crate::i18n::Language;
use fnv::FnvHashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const LANGUAGE_KEY: &str = "portfolio-language";
pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefParseError {
    #[error("unknown language {0:?}")]
    UnknownLanguage(String),
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Class name applied to the document root.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// `theme-color` meta content for mobile chrome.
    pub fn meta_color(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#000000",
        }
    }
}

impl FromStr for Theme {
    type Err = PrefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PrefParseError::UnknownTheme(other.to_owned())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Key-value persistence boundary.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store used by tests and as a fallback when browser storage is
/// unavailable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Read both preferences once at startup. Absent or unparseable values
    /// fall back to the browser locale and OS color scheme.
    pub fn load(
        store: &dyn PreferenceStore,
        browser_locale: Option<&str>,
        prefers_dark: bool,
    ) -> Self {
        let language = match store.get(LANGUAGE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("stored language ignored: {e}");
                locale_default(browser_locale)
            }),
            None => locale_default(browser_locale),
        };
        let theme = match store.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("stored theme ignored: {e}");
                scheme_default(prefers_dark)
            }),
            None => scheme_default(prefers_dark),
        };
        Self { language, theme }
    }

    /// Change the language and persist it immediately.
    pub fn set_language(&mut self, store: &mut dyn PreferenceStore, language: Language) {
        self.language = language;
        store.set(LANGUAGE_KEY, language.tag());
    }

    pub fn set_theme(&mut self, store: &mut dyn PreferenceStore, theme: Theme) {
        self.theme = theme;
        store.set(THEME_KEY, theme.class_name());
    }

    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(store, next);
        next
    }
}

fn locale_default(browser_locale: Option<&str>) -> Language {
    browser_locale.map(Language::from_locale).unwrap_or_default()
}

fn scheme_default(prefers_dark: bool) -> Theme {
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
