//! Keyword dictionary and intent routing.
//!
//! Free text is scanned for trigger keywords per category; every category
//! with a hit becomes a [`SuggestedAction`]. Matching is a plain
//! case-insensitive substring test, so "test" also fires inside "latest".

use crate::i18n::{detect_or, Language, LanguageStrings};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Lower-case `text` for keyword matching.
///
/// Dotted and dotless i collapse to a plain `i`, so Turkish "KAYGI" and
/// "İlişki" match the keywords "kaygı" and "ilişki".
fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| *c != '\u{307}')
        .map(|c| if c == 'ı' { 'i' } else { c })
        .collect()
}

/// How a category's action label is produced.
#[derive(Clone)]
pub enum Label {
    /// Pick a field from the UI strings of the routed language
    Localized(fn(&LanguageStrings) -> &'static str),
    /// Same text in every language
    Fixed(String),
}

impl Label {
    fn render(&self, lang: Language) -> String {
        match self {
            Label::Localized(pick) => pick(lang.strings()).to_string(),
            Label::Fixed(text) => text.clone(),
        }
    }
}

impl std::fmt::Debug for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Localized(_) => f.write_str("Localized(..)"),
            Label::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
        }
    }
}

/// One routable topic and its trigger keywords per language.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    /// Navigation destination
    pub target: String,
    /// Higher sorts first
    pub priority: u8,
    pub label: Label,
    keywords: HashMap<Language, Vec<String>>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        priority: u8,
        label: Label,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            priority,
            label,
            keywords: HashMap::new(),
        }
    }

    /// Add keywords for one language. Keywords are stored case-folded.
    pub fn with_keywords(mut self, lang: Language, keywords: &[&str]) -> Self {
        self.keywords
            .entry(lang)
            .or_default()
            .extend(keywords.iter().map(|k| fold(k)));
        self
    }

    pub fn keywords(&self, lang: Language) -> &[String] {
        self.keywords.get(&lang).map(Vec::as_slice).unwrap_or(&[])
    }

    fn matches(&self, folded_text: &str, lang: Language) -> bool {
        self.keywords(lang)
            .iter()
            .any(|keyword| !keyword.is_empty() && folded_text.contains(keyword.as_str()))
    }
}

/// A navigation suggestion produced by the router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedAction {
    pub category: String,
    pub label: String,
    pub target: String,
    pub priority: u8,
}

/// Category → language → keywords, in category declaration order.
///
/// Built once and never mutated while routing.
#[derive(Debug, Clone, Default)]
pub struct KeywordDictionary {
    categories: Vec<Category>,
}

type KeywordTable = &'static [(Language, &'static [&'static str])];

const THERAPIST: KeywordTable = &[
    (
        Language::ENGLISH,
        &["therapist", "therapy", "psychologist", "psychiatrist", "counselor", "counsellor"],
    ),
    (Language::PERSIAN, &["درمانگر", "روانشناس", "روان‌شناس", "روانپزشک", "مشاور"]),
    (Language::ARABIC, &["معالج", "طبيب نفسي", "أخصائي نفسي", "مستشار"]),
    (Language::SPANISH, &["terapeuta", "terapia", "psicólogo", "psicóloga", "psiquiatra"]),
    (Language::FRENCH, &["thérapeute", "thérapie", "psychologue", "psychiatre"]),
    (Language::GERMAN, &["therapeut", "therapie", "psychologe", "psychiater"]),
    (Language::ITALIAN, &["terapeuta", "terapia", "psicologo", "psichiatra"]),
    (Language::RUSSIAN, &["терапевт", "психолог", "психиатр", "терапия"]),
    (Language::CHINESE, &["心理医生", "治疗师", "咨询师"]),
    (Language::JAPANESE, &["セラピスト", "カウンセラー", "心理士"]),
    (Language::KOREAN, &["상담사", "치료사", "심리학자"]),
    (Language::HINDI, &["चिकित्सक", "मनोवैज्ञानिक", "थेरेपिस्ट"]),
    (Language::TURKISH, &["terapist", "psikolog", "terapi"]),
    (Language::PORTUGUESE, &["terapeuta", "terapia", "psicólogo", "psicóloga"]),
    (Language::DUTCH, &["therapeut", "therapie", "psycholoog"]),
];

const TEST: KeywordTable = &[
    (Language::ENGLISH, &["test", "quiz", "assessment"]),
    (Language::PERSIAN, &["تست", "آزمون"]),
    (Language::ARABIC, &["اختبار", "استبيان"]),
    (Language::SPANISH, &["test", "prueba", "cuestionario"]),
    (Language::FRENCH, &["test", "quiz", "questionnaire"]),
    (Language::GERMAN, &["test", "fragebogen"]),
    (Language::ITALIAN, &["test", "questionario"]),
    (Language::RUSSIAN, &["тест", "опрос"]),
    (Language::CHINESE, &["测试", "测验"]),
    (Language::JAPANESE, &["テスト", "診断"]),
    (Language::KOREAN, &["테스트", "검사"]),
    (Language::HINDI, &["परीक्षण", "टेस्ट"]),
    (Language::TURKISH, &["test", "anket"]),
    (Language::PORTUGUESE, &["teste", "questionário"]),
    (Language::DUTCH, &["test", "vragenlijst"]),
];

const ANXIETY: KeywordTable = &[
    (Language::ENGLISH, &["anxiety", "anxious", "panic", "worried", "nervous"]),
    (Language::PERSIAN, &["اضطراب", "نگرانی", "نگران", "وحشت"]),
    (Language::ARABIC, &["قلق", "هلع", "توتر عصبي"]),
    (Language::SPANISH, &["ansiedad", "ansioso", "ansiosa", "pánico"]),
    (Language::FRENCH, &["anxiété", "anxieux", "anxieuse", "panique"]),
    (Language::GERMAN, &["angst", "panik", "ängstlich"]),
    (Language::ITALIAN, &["ansia", "panico"]),
    (Language::RUSSIAN, &["тревог", "паник"]),
    (Language::CHINESE, &["焦虑", "恐慌"]),
    (Language::JAPANESE, &["不安", "パニック"]),
    (Language::KOREAN, &["불안", "공황"]),
    (Language::HINDI, &["चिंता", "घबराहट"]),
    (Language::TURKISH, &["kaygı", "anksiyete", "panik"]),
    (Language::PORTUGUESE, &["ansiedade", "ansioso", "pânico"]),
    (Language::DUTCH, &["angst", "paniek"]),
];

const DEPRESSION: KeywordTable = &[
    (Language::ENGLISH, &["depression", "depressed", "hopeless", "sad"]),
    (Language::PERSIAN, &["افسردگی", "افسرده", "غمگین", "ناامید"]),
    (Language::ARABIC, &["اكتئاب", "حزين", "يأس"]),
    (Language::SPANISH, &["depresión", "deprimido", "deprimida", "triste"]),
    (Language::FRENCH, &["dépression", "déprimé", "déprimée", "triste"]),
    (Language::GERMAN, &["depression", "deprimiert", "traurig"]),
    (Language::ITALIAN, &["depressione", "depresso", "triste"]),
    (Language::RUSSIAN, &["депресс", "грусть"]),
    (Language::CHINESE, &["抑郁", "难过"]),
    (Language::JAPANESE, &["うつ", "落ち込"]),
    (Language::KOREAN, &["우울"]),
    (Language::HINDI, &["अवसाद", "उदास"]),
    (Language::TURKISH, &["depresyon", "üzgün"]),
    (Language::PORTUGUESE, &["depressão", "deprimido", "triste"]),
    (Language::DUTCH, &["depressie", "somber", "verdrietig"]),
];

const STRESS: KeywordTable = &[
    (Language::ENGLISH, &["stress", "overwhelmed", "burnout", "burned out"]),
    (Language::PERSIAN, &["استرس", "فشار روانی", "فرسودگی"]),
    (Language::ARABIC, &["ضغط نفسي", "إجهاد", "توتر"]),
    (Language::SPANISH, &["estrés", "agobiado", "agotamiento"]),
    (Language::FRENCH, &["stress", "épuisement", "débordé"]),
    (Language::GERMAN, &["stress", "überfordert", "burnout"]),
    (Language::ITALIAN, &["stress", "esaurimento"]),
    (Language::RUSSIAN, &["стресс", "выгоран"]),
    (Language::CHINESE, &["压力", "倦怠"]),
    (Language::JAPANESE, &["ストレス", "燃え尽き"]),
    (Language::KOREAN, &["스트레스", "번아웃"]),
    (Language::HINDI, &["तनाव"]),
    (Language::TURKISH, &["stres", "tükenmişlik"]),
    (Language::PORTUGUESE, &["estresse", "stress", "esgotamento"]),
    (Language::DUTCH, &["stress", "overspannen", "burn-out"]),
];

const RELATIONSHIPS: KeywordTable = &[
    (Language::ENGLISH, &["relationship", "partner", "marriage", "breakup", "divorce"]),
    (Language::PERSIAN, &["رابطه", "ازدواج", "همسر", "جدایی", "طلاق"]),
    (Language::ARABIC, &["علاقة", "زواج", "طلاق", "شريك"]),
    (Language::SPANISH, &["relación", "pareja", "matrimonio", "divorcio"]),
    (Language::FRENCH, &["relation", "couple", "mariage", "divorce", "rupture"]),
    (Language::GERMAN, &["beziehung", "partner", "ehe", "trennung", "scheidung"]),
    (Language::ITALIAN, &["relazione", "coppia", "matrimonio", "divorzio"]),
    (Language::RUSSIAN, &["отношени", "брак", "развод"]),
    (Language::CHINESE, &["关系", "婚姻", "分手", "离婚"]),
    (Language::JAPANESE, &["恋愛", "結婚", "離婚", "パートナー"]),
    (Language::KOREAN, &["관계", "결혼", "이혼", "연애"]),
    (Language::HINDI, &["रिश्ता", "शादी", "तलाक"]),
    (Language::TURKISH, &["ilişki", "evlilik", "boşanma"]),
    (Language::PORTUGUESE, &["relacionamento", "casamento", "divórcio"]),
    (Language::DUTCH, &["relatie", "huwelijk", "scheiding"]),
];

const SLEEP: KeywordTable = &[
    (Language::ENGLISH, &["sleep", "insomnia", "nightmare", "tired"]),
    (Language::PERSIAN, &["خواب", "بی‌خوابی", "بیخوابی", "کابوس"]),
    (Language::ARABIC, &["نوم", "أرق", "كابوس"]),
    (Language::SPANISH, &["sueño", "insomnio", "dormir", "pesadilla"]),
    (Language::FRENCH, &["sommeil", "insomnie", "dormir", "cauchemar"]),
    (Language::GERMAN, &["schlaf", "schlaflos", "albtraum"]),
    (Language::ITALIAN, &["sonno", "insonnia", "dormire", "incubo"]),
    (Language::RUSSIAN, &["сон", "бессонниц", "кошмар"]),
    (Language::CHINESE, &["睡眠", "失眠", "噩梦"]),
    (Language::JAPANESE, &["睡眠", "不眠", "眠れ"]),
    (Language::KOREAN, &["수면", "불면", "악몽"]),
    (Language::HINDI, &["नींद", "अनिद्रा"]),
    (Language::TURKISH, &["uyku", "uykusuzluk", "kabus"]),
    (Language::PORTUGUESE, &["sono", "insônia", "dormir", "pesadelo"]),
    (Language::DUTCH, &["slaap", "slapeloos", "nachtmerrie"]),
];

const CHAT: KeywordTable = &[
    (Language::ENGLISH, &["talk", "chat", "listen", "lonely"]),
    (Language::PERSIAN, &["صحبت", "گفتگو", "حرف بزنم", "تنها"]),
    (Language::ARABIC, &["تحدث", "محادثة", "وحيد"]),
    (Language::SPANISH, &["hablar", "charlar", "solo", "sola"]),
    (Language::FRENCH, &["parler", "discuter", "seul", "seule"]),
    (Language::GERMAN, &["reden", "sprechen", "einsam"]),
    (Language::ITALIAN, &["parlare", "chiacchierare", "solo"]),
    (Language::RUSSIAN, &["поговорить", "одинок"]),
    (Language::CHINESE, &["聊天", "倾诉", "孤独"]),
    (Language::JAPANESE, &["話したい", "相談", "孤独"]),
    (Language::KOREAN, &["대화", "이야기", "외로"]),
    (Language::HINDI, &["बात", "अकेला"]),
    (Language::TURKISH, &["konuşmak", "sohbet", "yalnız"]),
    (Language::PORTUGUESE, &["conversar", "falar", "sozinho"]),
    (Language::DUTCH, &["praten", "kletsen", "eenzaam"]),
];

/// Built-in categories in declaration order.
fn builtin_categories() -> Vec<Category> {
    let specs: [(&str, &str, u8, fn(&LanguageStrings) -> &'static str, KeywordTable); 8] = [
        ("therapist", "/therapists", 2, |s| s.find_therapist, THERAPIST),
        ("test", "/tests", 1, |s| s.take_test, TEST),
        ("anxiety", "/tests/anxiety", 3, |s| s.anxiety_test, ANXIETY),
        ("depression", "/tests/depression", 3, |s| s.depression_test, DEPRESSION),
        ("stress", "/tests/stress", 2, |s| s.stress_test, STRESS),
        ("relationships", "/tests/relationships", 2, |s| s.relationships_test, RELATIONSHIPS),
        ("sleep", "/tests/sleep", 2, |s| s.sleep_test, SLEEP),
        ("chat", "/chat", 1, |s| s.start_chat, CHAT),
    ];

    specs
        .into_iter()
        .map(|(name, target, priority, label, table)| {
            table.iter().fold(
                Category::new(name, target, priority, Label::Localized(label)),
                |category, (lang, keywords)| category.with_keywords(*lang, keywords),
            )
        })
        .collect()
}

impl KeywordDictionary {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self {
            categories: builtin_categories(),
        }
    }

    /// Append a category. Declaration order is routing order for equal
    /// priorities.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Keywords for `category` in `lang`; empty when either is unknown.
    pub fn get_keywords(&self, category: &str, lang: Language) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.keywords(lang))
            .unwrap_or(&[])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

/// Scans free text against a [`KeywordDictionary`].
#[derive(Debug, Clone)]
pub struct IntentRouter {
    dictionary: KeywordDictionary,
    /// Language assumed for text the detector does not recognize
    fallback: Language,
}

impl IntentRouter {
    pub fn new(dictionary: KeywordDictionary) -> Self {
        Self {
            dictionary,
            fallback: Language::canonical(),
        }
    }

    /// Route unrecognized text as `lang` instead of English.
    pub fn with_fallback_language(mut self, lang: Language) -> Self {
        self.fallback = lang;
        self
    }

    pub fn fallback_language(&self) -> Language {
        self.fallback
    }

    /// Detect the language of `text`, falling back to the router's default.
    pub fn detect(&self, text: &str) -> Language {
        detect_or(text, self.fallback)
    }

    pub fn dictionary(&self) -> &KeywordDictionary {
        &self.dictionary
    }

    /// Suggested actions for `text` using the keywords of `lang`.
    ///
    /// Categories fire independently; results are ordered by descending
    /// priority, ties keeping declaration order.
    pub fn route_intent(&self, text: &str, lang: Language) -> Vec<SuggestedAction> {
        let folded = fold(text);

        let mut actions: Vec<SuggestedAction> = self
            .dictionary
            .categories
            .iter()
            .filter(|category| category.matches(&folded, lang))
            .map(|category| SuggestedAction {
                category: category.name.clone(),
                label: category.label.render(lang),
                target: category.target.clone(),
                priority: category.priority,
            })
            .collect();

        // sort_by is stable
        actions.sort_by(|a, b| b.priority.cmp(&a.priority));

        debug!(
            "Routed {} chars of {} text to {} actions",
            text.chars().count(),
            lang,
            actions.len()
        );
        actions
    }

    /// Detect the language of `text`, then route with its keywords.
    pub fn route(&self, text: &str) -> (Language, Vec<SuggestedAction>) {
        let lang = self.detect(text);
        (lang, self.route_intent(text, lang))
    }
}

impl Default for IntentRouter {
    fn default() -> Self {
        Self::new(KeywordDictionary::builtin())
    }
}
