//! Heuristic language detection for free text.
//!
//! Detection is a fixed, ordered list of rules: script ranges first, then
//! word-boundary function-word rules for Latin-script languages. The first
//! matching rule wins, so the order below is part of the behavior.

use crate::i18n::Language;
use regex::Regex;
use std::sync::OnceLock;

/// Script rules. Kana comes before Han because Japanese mixes both.
const SCRIPT_RULES: &[(&str, ScriptRule)] = &[
    (r"[\p{Hiragana}\p{Katakana}]", ScriptRule::Is(Language::JAPANESE)),
    (r"\p{Hangul}", ScriptRule::Is(Language::KOREAN)),
    (r"\p{Han}", ScriptRule::Is(Language::CHINESE)),
    (r"\p{Arabic}", ScriptRule::PersianOrArabic),
    (r"\p{Cyrillic}", ScriptRule::Is(Language::RUSSIAN)),
    (r"\p{Devanagari}", ScriptRule::Is(Language::HINDI)),
];

/// Letters Persian has and Arabic does not (including the Persian forms of
/// kaf and yeh).
const PERSIAN_ONLY: &str = r"[پچژگکی]";

/// Letters rare or absent in Persian, plus the Arabic forms of kaf, yeh,
/// teh marbuta and alef maksura.
const ARABIC_ONLY: &str = r"[ذضظغكيةى]";

/// Latin-script rules, tried in this order after every script rule failed.
/// Matching is case-insensitive except for the Turkish letters, where
/// folding would let a plain "I" match the dotless "ı".
///
/// Since the first hit wins, a rule must not list a word that is common in
/// a language tried after it (Portuguese "das" and "sono", Dutch "je",
/// Spanish "les" and "porque").
const WORD_RULES: &[(Language, &str)] = &[
    (
        Language::GERMAN,
        r"\b(?:und|ich|nicht|ist|ein|eine|mit|auch|für|danke|guten|bitte|mir|geht)\b",
    ),
    (
        Language::FRENCH,
        r"\b(?:bonjour|merci|j'ai|vous|suis|avec|pourquoi|très|oui|c'est|nous|ça|des|est)\b",
    ),
    (
        Language::SPANISH,
        r"\b(?:hola|gracias|estoy|cómo|qué|necesito|tengo|muy|también|usted|ayuda|los|las)\b",
    ),
    (
        Language::ITALIAN,
        r"\b(?:ciao|grazie|perché|molto|buongiorno|anche|questo|della|gli|sto|aiuto|bene)\b",
    ),
    (
        Language::PORTUGUESE,
        r"\b(?:olá|obrigado|obrigada|você|não|estou|muito|também|preciso|eu|ajuda)\b",
    ),
    (
        Language::DUTCH,
        r"\b(?:het|een|niet|ik|hoe|gaat|bedankt|goedemorgen|alsjeblieft|graag|wat)\b",
    ),
    (
        Language::TURKISH,
        r"(?-i:[ğĞıİşŞ])|\b(?:merhaba|nasılsın|teşekkürler|evet|hayır|bir|çok|için|değil|iyi)\b",
    ),
];

#[derive(Debug, Clone, Copy)]
enum ScriptRule {
    Is(Language),
    /// Arabic and Persian share a Unicode block and need letter-level
    /// disambiguation.
    PersianOrArabic,
}

struct CompiledRules {
    scripts: Vec<(Regex, ScriptRule)>,
    persian_only: Regex,
    arabic_only: Regex,
    words: Vec<(Language, Regex)>,
}

static RULES: OnceLock<CompiledRules> = OnceLock::new();

fn rules() -> &'static CompiledRules {
    RULES.get_or_init(|| CompiledRules {
        scripts: SCRIPT_RULES
            .iter()
            .map(|(pattern, rule)| (Regex::new(pattern).expect("valid script regex"), *rule))
            .collect(),
        persian_only: Regex::new(PERSIAN_ONLY).expect("valid Persian regex"),
        arabic_only: Regex::new(ARABIC_ONLY).expect("valid Arabic regex"),
        words: WORD_RULES
            .iter()
            .map(|(lang, pattern)| {
                let regex = Regex::new(&format!("(?i){}", pattern)).expect("valid word regex");
                (*lang, regex)
            })
            .collect(),
    })
}

/// Detect the language of `text`.
///
/// Empty or whitespace-only input, and text no rule recognizes, is English.
pub fn detect(text: &str) -> Language {
    detect_or(text, Language::ENGLISH)
}

/// Like [`detect`], but text no rule recognizes becomes `fallback`.
pub fn detect_or(text: &str, fallback: Language) -> Language {
    if text.trim().is_empty() {
        return fallback;
    }

    let rules = rules();

    for (regex, rule) in &rules.scripts {
        if !regex.is_match(text) {
            continue;
        }
        return match rule {
            ScriptRule::Is(lang) => *lang,
            ScriptRule::PersianOrArabic => {
                if rules.persian_only.is_match(text) {
                    Language::PERSIAN
                } else if rules.arabic_only.is_match(text) {
                    Language::ARABIC
                } else {
                    Language::PERSIAN
                }
            }
        };
    }

    rules
        .words
        .iter()
        .find(|(_, regex)| regex.is_match(text))
        .map(|(lang, _)| *lang)
        .unwrap_or(fallback)
}
