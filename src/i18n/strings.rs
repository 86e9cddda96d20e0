/// Localized user-facing strings for a language.
///
/// Action labels are shown next to intent suggestions; the chat strings are
/// used by [`ChatSession`](crate::chat::ChatSession).
#[derive(Debug, Clone)]
pub struct LanguageStrings {
    // ==================== Suggested Action Labels ====================
    /// Label for the therapist directory suggestion
    pub find_therapist: &'static str,

    /// Label for the generic test catalogue suggestion
    pub take_test: &'static str,

    pub anxiety_test: &'static str,
    pub depression_test: &'static str,
    pub stress_test: &'static str,
    pub relationships_test: &'static str,
    pub sleep_test: &'static str,

    /// Label for opening the AI chat
    pub start_chat: &'static str,

    // ==================== Chat Messages ====================
    /// First message shown in an empty chat
    pub chat_welcome: &'static str,

    /// Reply appended when the AI analysis endpoint cannot be reached
    pub ai_unavailable: &'static str,
}

// ==================== English Strings ====================

pub static ENGLISH_STRINGS: LanguageStrings = LanguageStrings {
    find_therapist: "Find a Therapist",
    take_test: "Take a Psychology Test",
    anxiety_test: "Anxiety Test",
    depression_test: "Depression Test",
    stress_test: "Stress Test",
    relationships_test: "Relationship Test",
    sleep_test: "Sleep Quality Test",
    start_chat: "Talk to the AI Assistant",

    chat_welcome: "Hello! How can I help you today?",
    ai_unavailable: "Sorry, I can't respond right now. Please try again in a moment.",
};

// ==================== Persian Strings ====================

pub static PERSIAN_STRINGS: LanguageStrings = LanguageStrings {
    find_therapist: "پیدا کردن درمانگر",
    take_test: "انجام تست روانشناسی",
    anxiety_test: "تست اضطراب",
    depression_test: "تست افسردگی",
    stress_test: "تست استرس",
    relationships_test: "تست روابط",
    sleep_test: "تست کیفیت خواب",
    start_chat: "گفتگو با دستیار هوشمند",

    chat_welcome: "سلام! چطور می‌تونم کمکتون کنم؟",
    ai_unavailable: "متأسفم، در حال حاضر نمی‌توانم پاسخ دهم. لطفاً کمی بعد دوباره تلاش کنید.",
};

// ==================== Arabic Strings ====================

pub static ARABIC_STRINGS: LanguageStrings = LanguageStrings {
    find_therapist: "ابحث عن معالج",
    take_test: "قم بإجراء اختبار نفسي",
    anxiety_test: "اختبار القلق",
    depression_test: "اختبار الاكتئاب",
    stress_test: "اختبار التوتر",
    relationships_test: "اختبار العلاقات",
    sleep_test: "اختبار جودة النوم",
    start_chat: "تحدث مع المساعد الذكي",

    chat_welcome: "مرحبا! كيف يمكنني مساعدتك اليوم؟",
    ai_unavailable: "عذراً، لا أستطيع الرد الآن. يرجى المحاولة مرة أخرى بعد قليل.",
};

// ==================== Spanish Strings ====================

pub static SPANISH_STRINGS: LanguageStrings = LanguageStrings {
    find_therapist: "Buscar un terapeuta",
    take_test: "Hacer un test psicológico",
    anxiety_test: "Test de ansiedad",
    depression_test: "Test de depresión",
    stress_test: "Test de estrés",
    relationships_test: "Test de relaciones",
    sleep_test: "Test de calidad del sueño",
    start_chat: "Hablar con el asistente de IA",

    chat_welcome: "¡Hola! ¿En qué puedo ayudarte hoy?",
    ai_unavailable: "Lo siento, no puedo responder ahora. Inténtalo de nuevo en un momento.",
};

// ==================== French Strings ====================

pub static FRENCH_STRINGS: LanguageStrings = LanguageStrings {
    find_therapist: "Trouver un thérapeute",
    take_test: "Passer un test psychologique",
    anxiety_test: "Test d'anxiété",
    depression_test: "Test de dépression",
    stress_test: "Test de stress",
    relationships_test: "Test relationnel",
    sleep_test: "Test de qualité du sommeil",
    start_chat: "Parler à l'assistant IA",

    chat_welcome: "Bonjour ! Comment puis-je vous aider aujourd'hui ?",
    ai_unavailable: "Désolé, je ne peux pas répondre pour le moment. Veuillez réessayer dans un instant.",
};

// ==================== German Strings ====================

pub static GERMAN_STRINGS: LanguageStrings = LanguageStrings {
    find_therapist: "Therapeuten finden",
    take_test: "Psychologischen Test machen",
    anxiety_test: "Angsttest",
    depression_test: "Depressionstest",
    stress_test: "Stresstest",
    relationships_test: "Beziehungstest",
    sleep_test: "Schlafqualitätstest",
    start_chat: "Mit dem KI-Assistenten sprechen",

    chat_welcome: "Hallo! Wie kann ich Ihnen heute helfen?",
    ai_unavailable: "Entschuldigung, ich kann gerade nicht antworten. Bitte versuchen Sie es gleich noch einmal.",
};
