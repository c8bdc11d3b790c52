//! Типы ядра архиватора

use std::path::PathBuf;

/// Режим обхода папки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMode {
    /// Только файлы верхнего уровня, без подпапок
    Flat,
    /// Всё поддерево с сохранением относительных путей
    #[default]
    Recursive,
}

impl WalkMode {
    /// Имя режима
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Recursive => "recursive",
        }
    }
}

/// Запись будущего архива: путь к файлу на диске и имя внутри архива
///
/// Имя записи всегда относительное, с разделителем `/` независимо от ОС.
#[derive(Debug, Clone)]
pub struct ZipEntry {
    /// Полный путь к файлу-источнику
    pub path: PathBuf,
    /// Имя записи внутри архива
    pub entry_name: String,
}

/// Результат операции (упаковки или распаковки)
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveReport {
    pub files_count: usize,
    /// Размер несжатых данных в байтах
    pub total_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_mode_default_is_recursive() {
        assert_eq!(WalkMode::default(), WalkMode::Recursive);
    }

    #[test]
    fn test_walk_mode_name() {
        assert_eq!(WalkMode::Flat.name(), "flat");
        assert_eq!(WalkMode::Recursive.name(), "recursive");
    }

    #[test]
    fn test_archive_report_default() {
        let report = ArchiveReport::default();
        assert_eq!(report.files_count, 0);
        assert_eq!(report.total_size, 0);
    }
}
