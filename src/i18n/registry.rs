//! Language registry: Single source of truth for all supported languages.
//!
//! The registry is a lazily initialized singleton (`OnceLock`). The language
//! set is closed: anything not listed here cannot be represented as a
//! [`Language`](crate::i18n::Language).

use crate::i18n::strings::{
    LanguageStrings, ARABIC_STRINGS, ENGLISH_STRINGS, FRENCH_STRINGS, GERMAN_STRINGS,
    PERSIAN_STRINGS, SPANISH_STRINGS,
};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "fa")
    pub code: &'static str,

    /// English name of the language (e.g., "Persian")
    pub name: &'static str,

    /// Native name of the language (e.g., "فارسی")
    pub native_name: &'static str,

    /// Whether this is the canonical/source language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Whether the script is written right-to-left
    pub rtl: bool,

    /// UI strings for this language. Languages without a hand-written
    /// table point at the English strings.
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Lookup is exact: codes are lower-case two-letter identifiers.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages, in declaration order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if the registry does not contain exactly one canonical
    /// language. The table is static, so this is a programming error.
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

const fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    rtl: bool,
    strings: &'static LanguageStrings,
) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        is_canonical: false,
        enabled: true,
        rtl,
        strings,
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            is_canonical: true,
            ..lang("en", "English", "English", false, &ENGLISH_STRINGS)
        },
        lang("fa", "Persian", "فارسی", true, &PERSIAN_STRINGS),
        lang("ar", "Arabic", "العربية", true, &ARABIC_STRINGS),
        lang("es", "Spanish", "Español", false, &SPANISH_STRINGS),
        lang("fr", "French", "Français", false, &FRENCH_STRINGS),
        lang("de", "German", "Deutsch", false, &GERMAN_STRINGS),
        lang("it", "Italian", "Italiano", false, &ENGLISH_STRINGS),
        lang("ru", "Russian", "Русский", false, &ENGLISH_STRINGS),
        lang("zh", "Chinese", "中文", false, &ENGLISH_STRINGS),
        lang("ja", "Japanese", "日本語", false, &ENGLISH_STRINGS),
        lang("ko", "Korean", "한국어", false, &ENGLISH_STRINGS),
        lang("hi", "Hindi", "हिन्दी", false, &ENGLISH_STRINGS),
        lang("tr", "Turkish", "Türkçe", false, &ENGLISH_STRINGS),
        lang("pt", "Portuguese", "Português", false, &ENGLISH_STRINGS),
        lang("nl", "Dutch", "Nederlands", false, &ENGLISH_STRINGS),
    ]
}
