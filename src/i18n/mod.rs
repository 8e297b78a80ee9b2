//! Interface language support.
//!
//! DESIGN
//! ======
//! Pages are authored in English; translated strings live in an embedded
//! table keyed by language and element key. Lookup is total: English always
//! resolves to the authored text, and any language/key pair without a table
//! entry falls back to the authored text as well, so partially translated
//! languages degrade to English rather than blank content.
//!
//! The selected language is UI state (see [`crate::state::ui::UiState`]) and
//! is persisted to `localStorage` so it survives reloads. Persistence is
//! best-effort browser-only behavior; SSR paths no-op.


use std::collections::HashMap;
use std::sync::LazyLock;

use leptos::prelude::*;

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "mediscan_language";

/// Interface languages offered in the navbar menu.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
    Te,
    Bn,
}

impl Language {
    /// Menu order for the language switcher.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Ta,
        Language::Te,
        Language::Bn,
    ];

    /// Two-letter code used in storage and markup.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Bn => "bn",
        }
    }

    /// Native-script name shown in the language menu.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Ta => "தமிழ்",
            Language::Te => "తెలుగు",
            Language::Bn => "বাংলা",
        }
    }

    /// Parse a stored or user-supplied code. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "ta" => Some(Language::Ta),
            "te" => Some(Language::Te),
            "bn" => Some(Language::Bn),
            _ => None,
        }
    }
}

/// Translated strings, keyed by language and element key.
#[derive(Debug, Default, Clone)]
pub struct TranslationTable {
    entries: HashMap<Language, HashMap<String, String>>,
}

impl TranslationTable {
    /// Parse a table from JSON of the form `{"hi": {"key": "text", ...}, ...}`.
    ///
    /// Blocks keyed by an unrecognized language code are dropped.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let parsed: HashMap<String, HashMap<String, String>> = serde_json::from_str(raw)?;
        let mut entries = HashMap::new();
        for (code, texts) in parsed {
            if let Some(language) = Language::from_code(&code) {
                entries.insert(language, texts);
            }
        }
        Ok(Self { entries })
    }

    /// Exact table entry for a language/key pair, if one exists.
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.entries
            .get(&language)
            .and_then(|texts| texts.get(key))
            .map(String::as_str)
    }

    /// Resolve the display text for a key, falling back to the authored
    /// English text when the language is English or the entry is missing.
    pub fn resolve<'a>(&'a self, language: Language, key: &str, authored: &'a str) -> &'a str {
        if language == Language::default() {
            return authored;
        }
        self.lookup(language, key).unwrap_or(authored)
    }
}

static TABLE: LazyLock<TranslationTable> = LazyLock::new(|| {
    TranslationTable::from_json(include_str!("translations.json")).unwrap_or_else(|err| {
        leptos::logging::warn!("translation table failed to parse: {err}");
        TranslationTable::default()
    })
});

/// The embedded translation table.
pub fn table() -> &'static TranslationTable {
    &TABLE
}

/// Reactive text for a translatable element: re-resolves whenever the
/// selected language changes.
pub fn translated(
    ui: RwSignal<UiState>,
    key: &'static str,
    authored: &'static str,
) -> impl Fn() -> String + Clone {
    move || {
        let language = ui.with(|state| state.language);
        table().resolve(language, key, authored).to_owned()
    }
}

/// Switch the interface language and persist the choice.
///
/// Unknown codes fall back to English rather than erroring, so a stale or
/// hand-edited stored value can never wedge the menu.
pub fn change_language(ui: RwSignal<UiState>, code: &str) {
    let language = Language::from_code(code).unwrap_or_default();
    ui.update(|state| state.language = language);
    save_preference(language);
}

/// Read the persisted language preference from `localStorage`.
pub fn load_preference() -> Language {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Language::default()
    }
}

/// Persist the language preference to `localStorage`.
pub fn save_preference(language: Language) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, language.code());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = language;
    }
}
