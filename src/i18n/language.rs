//! Language type: validated member of the closed language set.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated language.
///
/// Only codes present in the [`LanguageRegistry`] can be turned into a
/// `Language`, so every value is a member of the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "fa")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const PERSIAN: Language = Language { code: "fa" };
    pub const ARABIC: Language = Language { code: "ar" };
    pub const SPANISH: Language = Language { code: "es" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const GERMAN: Language = Language { code: "de" };
    pub const ITALIAN: Language = Language { code: "it" };
    pub const RUSSIAN: Language = Language { code: "ru" };
    pub const CHINESE: Language = Language { code: "zh" };
    pub const JAPANESE: Language = Language { code: "ja" };
    pub const KOREAN: Language = Language { code: "ko" };
    pub const HINDI: Language = Language { code: "hi" };
    pub const TURKISH: Language = Language { code: "tr" };
    pub const PORTUGUESE: Language = Language { code: "pt" };
    pub const DUTCH: Language = Language { code: "nl" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Like [`Language::from_code`], but unknown input becomes English.
    ///
    /// Surrounding whitespace and case are ignored.
    pub fn from_code_or_default(code: &str) -> Language {
        Self::from_code(&code.trim().to_ascii_lowercase()).unwrap_or(Language::ENGLISH)
    }

    /// Get the canonical (source) language all UI strings are written in.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// All enabled languages in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Whether text in this language is laid out right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.config().rtl
    }

    /// Localized UI strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::ENGLISH
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for Language {
    /// Stored codes that are no longer supported fall back to English
    /// rather than failing the whole record.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code_or_default(&code))
    }
}
