//! Состояние приложения

use std::path::PathBuf;
use std::sync::mpsc;
use toolza_zipper::archive::{ArchiveReport, ArchiveError};
use toolza_zipper::i18n::{t, Language, Translations};

/// Тип результата файлового диалога
pub enum DialogResult {
    FileToZip(PathBuf),
    FolderToZip(PathBuf),
    ArchiveToExtract(PathBuf),
}

/// Завершение операции на рабочем потоке
pub struct OperationOutcome {
    /// Что делали (для лога)
    pub label: String,
    pub result: Result<ArchiveReport, ArchiveError>,
}

/// Режим работы приложения
#[derive(PartialEq, Clone, Copy)]
pub enum Mode {
    Zip,
    Extract,
}

/// Главная структура приложения
pub struct App {
    // Язык интерфейса
    pub language: Language,

    // Режим работы
    pub mode: Mode,

    /// Обходить подпапки при упаковке папки
    pub recursive: bool,

    // === Общее состояние ===
    /// Идёт операция (одновременно выполняется не более одной)
    pub is_running: bool,
    pub status_message: String,
    pub log_messages: Vec<String>,
    /// Итог последней операции для показа в текущем режиме
    pub last_outcome: Option<String>,

    /// Стартовая папка файловых диалогов
    pub start_dir: PathBuf,

    // === Файловые диалоги (асинхронные) ===
    pub dialog_tx: mpsc::Sender<DialogResult>,
    pub dialog_rx: mpsc::Receiver<DialogResult>,

    // === Результаты операций с рабочего потока ===
    pub result_tx: mpsc::Sender<OperationOutcome>,
    pub result_rx: mpsc::Receiver<OperationOutcome>,
}

impl App {
    pub fn new() -> Self {
        let start_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        // Каналы для результатов диалогов и операций
        let (dialog_tx, dialog_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();

        Self {
            language: Language::default(),
            mode: Mode::Zip,
            recursive: true,
            is_running: false,
            status_message: String::new(),
            log_messages: Vec::new(),
            last_outcome: None,
            start_dir,
            dialog_tx,
            dialog_rx,
            result_tx,
            result_rx,
        }
    }

    /// Добавить сообщение в лог
    pub fn log(&mut self, message: impl Into<String>) {
        self.log_messages.push(message.into());
    }

    /// Проверить, можно ли запускать новую операцию
    pub fn can_start(&self) -> bool {
        !self.is_running
    }

    /// Получить переводы для текущего языка
    pub fn t(&self) -> &'static Translations {
        t(self.language)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
