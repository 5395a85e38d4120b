//! Localized interface strings
//!
//! The translator's own chrome (labels, placeholders, the in-slot error
//! marker) is localized per UI language. Korean, English, and Japanese are
//! fully localized; every other supported language falls back to English,
//! as does any key missing from a partially localized set.

use crate::language::Language;

/// Localized strings for one UI language
struct UiMessages {
    title: &'static str,
    ui_lang_label: &'static str,
    select_lang: &'static str,
    placeholder: &'static str,
    error: &'static str,
    translating: &'static str,
    powered_by: &'static str,
}

const KO: UiMessages = UiMessages {
    title: "3중 자동 번역기",
    ui_lang_label: "사용자 인터페이스 언어",
    select_lang: "언어 선택",
    placeholder: "텍스트를 입력하세요...",
    error: "번역 오류",
    translating: "번역 중...",
    powered_by: "번역 제공: MyMemory API",
};

const EN: UiMessages = UiMessages {
    title: "Triple Auto Translator",
    ui_lang_label: "Interface Language",
    select_lang: "Select Language",
    placeholder: "Enter text...",
    error: "Translation Error",
    translating: "Translating...",
    powered_by: "Powered by MyMemory API",
};

const JA: UiMessages = UiMessages {
    title: "3重自動翻訳機",
    ui_lang_label: "インターフェース言語",
    select_lang: "言語を選択",
    placeholder: "テキストを入力...",
    error: "翻訳エラー",
    translating: "翻訳中...",
    powered_by: "Powered by MyMemory API",
};

fn messages_for(locale: Language) -> &'static UiMessages {
    match locale {
        Language::Korean => &KO,
        Language::Japanese => &JA,
        // All other locales fall back to English
        _ => &EN,
    }
}

/// UI string lookup for a fixed interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiText {
    locale: Language,
}

impl UiText {
    pub fn new(locale: Language) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Language {
        self.locale
    }

    pub fn title(&self) -> &'static str {
        messages_for(self.locale).title
    }

    pub fn ui_lang_label(&self) -> &'static str {
        messages_for(self.locale).ui_lang_label
    }

    pub fn select_lang(&self) -> &'static str {
        messages_for(self.locale).select_lang
    }

    pub fn placeholder(&self) -> &'static str {
        messages_for(self.locale).placeholder
    }

    pub fn error(&self) -> &'static str {
        messages_for(self.locale).error
    }

    pub fn translating(&self) -> &'static str {
        messages_for(self.locale).translating
    }

    pub fn powered_by(&self) -> &'static str {
        messages_for(self.locale).powered_by
    }

    /// The bracketed marker written into a slot whose translation failed
    pub fn error_marker(&self) -> String {
        format!("[{}]", self.error())
    }
}
