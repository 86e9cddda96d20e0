//! Static fallback translations.
//!
//! Used when the remote translator is unreachable, or when it hands back
//! the source string unchanged. Keys are exact English source strings.

use crate::i18n::Language;
use std::collections::HashMap;

/// Hand-curated `language → source → translation` table.
///
/// A plain value object: build one with [`FallbackDictionary::builtin`] or
/// [`FallbackDictionary::empty`] plus [`FallbackDictionary::insert`], then
/// hand it to the [`Translator`](crate::translation::Translator).
#[derive(Debug, Clone, Default)]
pub struct FallbackDictionary {
    entries: HashMap<Language, HashMap<String, String>>,
}

/// Quiz answer scale and common UI labels.
const BUILTIN: &[(Language, &[(&str, &str)])] = &[
    (
        Language::PERSIAN,
        &[
            ("Strongly Agree", "کاملاً موافقم"),
            ("Agree", "موافقم"),
            ("Neutral", "نظری ندارم"),
            ("Disagree", "مخالفم"),
            ("Strongly Disagree", "کاملاً مخالفم"),
            ("Next", "بعدی"),
            ("Previous", "قبلی"),
            ("Submit", "ارسال"),
            ("Your Result", "نتیجه شما"),
            ("Find a Therapist", "پیدا کردن درمانگر"),
            ("Psychology Tests", "تست‌های روانشناسی"),
            ("Settings", "تنظیمات"),
            ("Profile", "پروفایل"),
        ],
    ),
    (
        Language::ARABIC,
        &[
            ("Strongly Agree", "أوافق بشدة"),
            ("Agree", "أوافق"),
            ("Neutral", "محايد"),
            ("Disagree", "لا أوافق"),
            ("Strongly Disagree", "لا أوافق بشدة"),
            ("Next", "التالي"),
            ("Previous", "السابق"),
            ("Submit", "إرسال"),
            ("Your Result", "نتيجتك"),
            ("Find a Therapist", "ابحث عن معالج"),
            ("Psychology Tests", "الاختبارات النفسية"),
            ("Settings", "الإعدادات"),
            ("Profile", "الملف الشخصي"),
        ],
    ),
    (
        Language::SPANISH,
        &[
            ("Strongly Agree", "Totalmente de acuerdo"),
            ("Agree", "De acuerdo"),
            ("Neutral", "Neutral"),
            ("Disagree", "En desacuerdo"),
            ("Strongly Disagree", "Totalmente en desacuerdo"),
            ("Next", "Siguiente"),
            ("Previous", "Anterior"),
            ("Submit", "Enviar"),
            ("Your Result", "Tu resultado"),
            ("Find a Therapist", "Buscar un terapeuta"),
            ("Psychology Tests", "Tests psicológicos"),
            ("Settings", "Configuración"),
            ("Profile", "Perfil"),
        ],
    ),
    (
        Language::FRENCH,
        &[
            ("Strongly Agree", "Tout à fait d'accord"),
            ("Agree", "D'accord"),
            ("Neutral", "Neutre"),
            ("Disagree", "Pas d'accord"),
            ("Strongly Disagree", "Pas du tout d'accord"),
            ("Next", "Suivant"),
            ("Previous", "Précédent"),
            ("Submit", "Envoyer"),
            ("Your Result", "Votre résultat"),
            ("Find a Therapist", "Trouver un thérapeute"),
            ("Psychology Tests", "Tests psychologiques"),
            ("Settings", "Paramètres"),
            ("Profile", "Profil"),
        ],
    ),
    (
        Language::GERMAN,
        &[
            ("Strongly Agree", "Stimme voll zu"),
            ("Agree", "Stimme zu"),
            ("Neutral", "Neutral"),
            ("Disagree", "Stimme nicht zu"),
            ("Strongly Disagree", "Stimme überhaupt nicht zu"),
            ("Next", "Weiter"),
            ("Previous", "Zurück"),
            ("Submit", "Absenden"),
            ("Your Result", "Ihr Ergebnis"),
            ("Find a Therapist", "Therapeuten finden"),
            ("Psychology Tests", "Psychologische Tests"),
            ("Settings", "Einstellungen"),
            ("Profile", "Profil"),
        ],
    ),
];

impl FallbackDictionary {
    /// A dictionary with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in table (Persian, Arabic, Spanish, French, German).
    pub fn builtin() -> Self {
        let mut dictionary = Self::empty();
        for (lang, pairs) in BUILTIN {
            for (source, translated) in pairs.iter() {
                dictionary.insert(*lang, *source, *translated);
            }
        }
        dictionary
    }

    /// Add or replace one entry.
    pub fn insert(
        &mut self,
        lang: Language,
        source: impl Into<String>,
        translated: impl Into<String>,
    ) -> &mut Self {
        self.entries
            .entry(lang)
            .or_default()
            .insert(source.into(), translated.into());
        self
    }

    /// Exact lookup by language and source string.
    pub fn lookup(&self, lang: Language, source: &str) -> Option<&str> {
        self.entries
            .get(&lang)
            .and_then(|table| table.get(source))
            .map(String::as_str)
    }

    /// Number of entries for one language.
    pub fn len_for(&self, lang: Language) -> usize {
        self.entries.get(&lang).map(HashMap::len).unwrap_or(0)
    }
}
