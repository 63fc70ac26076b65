use std::collections::HashMap;
use std::sync::Arc;

/// One supported boundary language and the codes each backend expects for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub recognition_locale: &'static str,
    pub synthesis_code: &'static str,
}

const fn entry(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    recognition_locale: &'static str,
    synthesis_code: &'static str,
) -> LanguageEntry {
    LanguageEntry {
        code,
        name,
        native_name,
        recognition_locale,
        synthesis_code,
    }
}

const BUILTIN_LANGUAGES: &[LanguageEntry] = &[
    entry("en", "English", "English", "en-US", "en"),
    entry("hi", "Hindi", "हिन्दी", "hi-IN", "hi"),
    entry("kn", "Kannada", "ಕನ್ನಡ", "kn-IN", "kn"),
    entry("ta", "Tamil", "தமிழ்", "ta-IN", "ta"),
    entry("te", "Telugu", "తెలుగు", "te-IN", "te"),
    entry("ml", "Malayalam", "മലയാളം", "ml-IN", "ml"),
    entry("bn", "Bengali", "বাংলা", "bn-IN", "bn"),
    entry("gu", "Gujarati", "ગુજરાતી", "gu-IN", "gu"),
    entry("mr", "Marathi", "मराठी", "mr-IN", "mr"),
    entry("pa", "Punjabi", "ਪੰਜਾਬੀ", "pa-IN", "pa"),
    entry("ur", "Urdu", "اردو", "ur-PK", "ur"),
    entry("es", "Spanish", "Español", "es-ES", "es"),
    entry("fr", "French", "Français", "fr-FR", "fr"),
    entry("de", "German", "Deutsch", "de-DE", "de"),
    entry("it", "Italian", "Italiano", "it-IT", "it"),
    entry("pt", "Portuguese", "Português", "pt-PT", "pt"),
    entry("ru", "Russian", "Русский", "ru-RU", "ru"),
    entry("ja", "Japanese", "日本語", "ja-JP", "ja"),
    entry("ko", "Korean", "한국어", "ko-KR", "ko"),
    entry("zh", "Chinese", "中文", "zh-CN", "zh-CN"),
    entry("ar", "Arabic", "العربية", "ar-SA", "ar"),
];

/// Read-only table of supported languages, built once at startup.
#[derive(Debug)]
pub struct LanguageCodeTable {
    entries: Vec<LanguageEntry>,
    index: HashMap<&'static str, usize>,
}

impl LanguageCodeTable {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_LANGUAGES.to_vec())
    }

    pub fn from_entries(entries: Vec<LanguageEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.code, i))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, code: &str) -> Option<&LanguageEntry> {
        self.index.get(code).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }
}

/// Translates boundary language codes into backend-specific codes.
///
/// Unknown codes are passed through unchanged, so mapping never fails.
#[derive(Debug, Clone)]
pub struct LanguageCodeMapper {
    table: Arc<LanguageCodeTable>,
}

impl LanguageCodeMapper {
    pub fn new(table: Arc<LanguageCodeTable>) -> Self {
        Self { table }
    }

    pub fn to_recognition_locale(&self, code: &str) -> String {
        self.table
            .get(code)
            .map(|e| e.recognition_locale)
            .unwrap_or(code)
            .to_string()
    }

    pub fn to_synthesis_code(&self, code: &str) -> String {
        self.table
            .get(code)
            .map(|e| e.synthesis_code)
            .unwrap_or(code)
            .to_string()
    }

    pub fn table(&self) -> &LanguageCodeTable {
        &self.table
    }
}
