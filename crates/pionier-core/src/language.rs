//! The supported language set.
//!
//! One enumerated set with a canonical ISO 639-1 code and a display name in
//! the user's locale (Polish, as the product ships). Parsing accepts either
//! form, so config files and the CLI can use short codes while the stored
//! history keeps the display names the user saw.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A language the translator supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Polish,
    English,
    French,
    German,
    Spanish,
    Italian,
    Chinese,
    Japanese,
    Russian,
    Arabic,
    Portuguese,
    Korean,
    Dutch,
    Swedish,
    Greek,
    Czech,
    Turkish,
    Hungarian,
    Finnish,
    Indonesian,
    Thai,
    Vietnamese,
    Hebrew,
    Persian,
    Ukrainian,
    Romanian,
    Bulgarian,
    Slovak,
    Croatian,
}

/// All supported languages, in menu order.
pub const ALL_LANGUAGES: [Language; 29] = [
    Language::Polish,
    Language::English,
    Language::French,
    Language::German,
    Language::Spanish,
    Language::Italian,
    Language::Chinese,
    Language::Japanese,
    Language::Russian,
    Language::Arabic,
    Language::Portuguese,
    Language::Korean,
    Language::Dutch,
    Language::Swedish,
    Language::Greek,
    Language::Czech,
    Language::Turkish,
    Language::Hungarian,
    Language::Finnish,
    Language::Indonesian,
    Language::Thai,
    Language::Vietnamese,
    Language::Hebrew,
    Language::Persian,
    Language::Ukrainian,
    Language::Romanian,
    Language::Bulgarian,
    Language::Slovak,
    Language::Croatian,
];

impl Language {
    /// Canonical ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Polish => "pl",
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::Russian => "ru",
            Language::Arabic => "ar",
            Language::Portuguese => "pt",
            Language::Korean => "ko",
            Language::Dutch => "nl",
            Language::Swedish => "sv",
            Language::Greek => "el",
            Language::Czech => "cs",
            Language::Turkish => "tr",
            Language::Hungarian => "hu",
            Language::Finnish => "fi",
            Language::Indonesian => "id",
            Language::Thai => "th",
            Language::Vietnamese => "vi",
            Language::Hebrew => "he",
            Language::Persian => "fa",
            Language::Ukrainian => "uk",
            Language::Romanian => "ro",
            Language::Bulgarian => "bg",
            Language::Slovak => "sk",
            Language::Croatian => "hr",
        }
    }

    /// Display name shown to the user and stored in history records.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Polish => "polski",
            Language::English => "angielski",
            Language::French => "francuski",
            Language::German => "niemiecki",
            Language::Spanish => "hiszpański",
            Language::Italian => "włoski",
            Language::Chinese => "chiński",
            Language::Japanese => "japoński",
            Language::Russian => "rosyjski",
            Language::Arabic => "arabski",
            Language::Portuguese => "portugalski",
            Language::Korean => "koreański",
            Language::Dutch => "holenderski",
            Language::Swedish => "szwedzki",
            Language::Greek => "grecki",
            Language::Czech => "czeski",
            Language::Turkish => "turecki",
            Language::Hungarian => "węgierski",
            Language::Finnish => "fiński",
            Language::Indonesian => "indonezyjski",
            Language::Thai => "tajski",
            Language::Vietnamese => "wietnamski",
            Language::Hebrew => "hebrajski",
            Language::Persian => "perski",
            Language::Ukrainian => "ukraiński",
            Language::Romanian => "rumuński",
            Language::Bulgarian => "bułgarski",
            Language::Slovak => "słowacki",
            Language::Croatian => "chorwacki",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    /// Parse from a canonical code or a display name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ALL_LANGUAGES
            .into_iter()
            .find(|lang| lang.code() == needle || lang.display_name() == needle)
            .ok_or_else(|| CoreError::UnsupportedLanguage(s.to_string()))
    }
}
