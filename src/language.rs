//! Supported language enumeration
//!
//! The translator operates over a fixed set of languages. Each entry carries
//! a stable ISO 639-1 code, an English display name, and a native-script
//! display name for language pickers.

use crate::error::TranslateError;

/// A language from the supported set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Korean,
    English,
    Japanese,
    Chinese,
    Spanish,
    French,
    German,
    Russian,
}

impl Language {
    /// All supported languages, in picker display order
    pub const ALL: [Language; 8] = [
        Language::Korean,
        Language::English,
        Language::Japanese,
        Language::Chinese,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Russian,
    ];

    /// Stable ISO 639-1 code, as sent to translation providers
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Russian => "ru",
        }
    }

    /// English display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Korean => "Korean",
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Russian => "Russian",
        }
    }

    /// Display name in the language's own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Korean => "한국어",
            Language::English => "English",
            Language::Japanese => "日本語",
            Language::Chinese => "中文",
            Language::Spanish => "Español",
            Language::French => "Français",
            Language::German => "Deutsch",
            Language::Russian => "Русский",
        }
    }

    /// Look up a language by its ISO code (case-insensitive, region
    /// subtags stripped, so `en-US` resolves to `English`)
    pub fn from_code(code: &str) -> Option<Language> {
        let base = code.split('-').next().unwrap_or(code).to_lowercase();
        Language::ALL.iter().copied().find(|l| l.code() == base)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| {
            TranslateError::InvalidLanguage(format!("Unsupported language code: {}", s))
        })
    }
}
