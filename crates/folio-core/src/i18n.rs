//! Language selection and dotted-key translation lookup.
//!
//! Lookup never fails: a key missing from the active language falls back to
//! French, and a key missing everywhere comes back verbatim so the UI shows
//! the raw key instead of nothing.

use crate::translations;
use fnv::FnvHashMap;
use std::fmt;
use std::str::FromStr;

use crate::prefs::PrefParseError;

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Fr,
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Fr, Language::En, Language::Ar];

    /// BCP-47 tag written to the document `lang` attribute.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// Document text direction attribute value.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Best-effort match of a browser locale ("en-US", "ar", ...) against
    /// the supported set; anything else lands on the default.
    pub fn from_locale(locale: &str) -> Language {
        let primary = locale.split(['-', '_']).next().unwrap_or(locale);
        primary.parse().unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = PrefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(PrefParseError::UnknownLanguage(other.to_owned())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Translation lookup over the static tables.
pub struct Translator {
    tables: FnvHashMap<Language, FnvHashMap<&'static str, &'static str>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    pub fn new() -> Self {
        Self::from_tables(translations::FR, translations::EN, translations::AR)
    }

    /// Build from explicit tables; [`Translator::new`] uses the shipped
    /// ones.
    pub fn from_tables(
        fr: &'static [(&'static str, &'static str)],
        en: &'static [(&'static str, &'static str)],
        ar: &'static [(&'static str, &'static str)],
    ) -> Self {
        let mut tables = FnvHashMap::default();
        tables.insert(Language::Fr, build_table(fr));
        tables.insert(Language::En, build_table(en));
        tables.insert(Language::Ar, build_table(ar));
        Self { tables }
    }

    /// Resolve `key` for `language`, falling back to French and finally to
    /// the key itself.
    pub fn translate<'a>(&self, language: Language, key: &'a str) -> &'a str {
        if let Some(value) = self.tables.get(&language).and_then(|t| t.get(key).copied()) {
            return value;
        }
        if let Some(value) = self
            .tables
            .get(&Language::Fr)
            .and_then(|t| t.get(key).copied())
        {
            return value;
        }
        key
    }

    /// Whether `key` exists for `language` without consulting the fallback.
    pub fn has(&self, language: Language, key: &str) -> bool {
        self.tables
            .get(&language)
            .is_some_and(|t| t.contains_key(key))
    }
}

fn build_table(entries: &'static [(&'static str, &'static str)]) -> FnvHashMap<&'static str, &'static str> {
    entries.iter().copied().collect()
}
