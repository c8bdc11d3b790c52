//! Модуль интернационализации (i18n)
//!
//! Поддерживаемые языки: русский, украинский, английский

mod translations;

pub use translations::*;

/// Поддерживаемые языки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Russian,
    Ukrainian,
    English,
}

impl Language {
    /// Название языка на этом языке
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Russian => "Русский",
            Language::Ukrainian => "Українська",
            Language::English => "English",
        }
    }

    /// Флаг/эмодзи для языка
    pub fn flag(&self) -> &'static str {
        match self {
            Language::Russian => "🇷🇺",
            Language::Ukrainian => "🇺🇦",
            Language::English => "🇬🇧",
        }
    }

    /// Все доступные языки
    pub fn all() -> &'static [Language] {
        &[Language::Russian, Language::Ukrainian, Language::English]
    }
}

/// Структура с переводами всех строк интерфейса
#[derive(Debug, Clone)]
pub struct Translations {
    // === Главное меню ===
    pub app_title: &'static str,
    pub mode_zip: &'static str,
    pub mode_extract: &'static str,

    // === Упаковка ===
    pub zip_title: &'static str,
    pub zip_hint: &'static str,
    pub select_file_to_zip: &'static str,
    pub select_folder_to_zip: &'static str,
    pub recursive_option: &'static str,
    pub recursive_tooltip: &'static str,

    // === Распаковка ===
    pub extract_title: &'static str,
    pub extract_hint: &'static str,
    pub select_archive: &'static str,

    // === Общее ===
    pub status: &'static str,
    pub log: &'static str,
    pub clear: &'static str,
    pub log_empty: &'static str,
    pub ready: &'static str,
    pub working: &'static str,
    pub files_suffix: &'static str,
}

impl Translations {
    /// Получить переводы для указанного языка
    pub fn for_language(lang: Language) -> &'static Translations {
        match lang {
            Language::Russian => &translations::RU,
            Language::Ukrainian => &translations::UK,
            Language::English => &translations::EN,
        }
    }
}

/// Глобальный доступ к текущему языку (для удобства)
pub fn t(lang: Language) -> &'static Translations {
    Translations::for_language(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_languages_have_translations() {
        for lang in Language::all() {
            let t = t(*lang);
            assert!(!t.app_title.is_empty());
            assert!(!t.mode_zip.is_empty());
            assert!(!t.mode_extract.is_empty());
        }
    }

    #[test]
    fn test_default_language_is_russian() {
        assert_eq!(Language::default(), Language::Russian);
    }
}
