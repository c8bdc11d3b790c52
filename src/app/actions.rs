//! Действия приложения

use super::state::{App, DialogResult, OperationOutcome};
use std::path::PathBuf;
use toolza_zipper::archive::{self, WalkMode};

impl App {
    // === Файловые диалоги ===

    /// Выбрать файл для упаковки (асинхронно)
    pub fn select_file_to_zip_dialog(&mut self) {
        let tx = self.dialog_tx.clone();
        let start_dir = self.start_dir.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Выберите файл для упаковки")
                .set_directory(start_dir)
                .pick_file()
            {
                let _ = tx.send(DialogResult::FileToZip(path));
            }
        });
    }

    /// Выбрать папку для упаковки (асинхронно)
    pub fn select_folder_to_zip_dialog(&mut self) {
        let tx = self.dialog_tx.clone();
        let start_dir = self.start_dir.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Выберите папку для упаковки")
                .set_directory(start_dir)
                .pick_folder()
            {
                let _ = tx.send(DialogResult::FolderToZip(path));
            }
        });
    }

    /// Выбрать архив для распаковки (асинхронно)
    pub fn select_archive_dialog(&mut self) {
        let tx = self.dialog_tx.clone();
        let start_dir = self.start_dir.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Выберите zip архив")
                .set_directory(start_dir)
                .add_filter("Zip архивы", &["zip"])
                .pick_file()
            {
                let _ = tx.send(DialogResult::ArchiveToExtract(path));
            }
        });
    }

    // === Запуск операций ===

    /// Упаковать одиночный файл (архив рядом с файлом)
    pub fn start_zip_file(&mut self, path: PathBuf) {
        let label = format!("📄 {}", path.display());
        self.spawn_operation(label, move || archive::zip_file(&path));
    }

    /// Упаковать папку (архив рядом с папкой)
    pub fn start_zip_folder(&mut self, path: PathBuf) {
        let mode = if self.recursive {
            WalkMode::Recursive
        } else {
            WalkMode::Flat
        };
        let archive_path = archive::default_archive_path_for_folder(&path);
        let label = format!("📁 {}", path.display());
        self.spawn_operation(label, move || {
            archive::zip_folder_to(&path, &archive_path, mode)
        });
    }

    /// Распаковать архив (в папку с именем архива)
    pub fn start_extract(&mut self, path: PathBuf) {
        let label = format!("📦 {}", path.display());
        self.spawn_operation(label, move || archive::unzip_file(&path));
    }

    /// Запустить операцию на рабочем потоке
    ///
    /// Ядро выполняет не более одной операции за раз; занятость
    /// отслеживается флагом is_running, повторный запуск игнорируется.
    fn spawn_operation<F>(&mut self, label: String, op: F)
    where
        F: FnOnce() -> toolza_zipper::archive::Result<toolza_zipper::archive::ArchiveReport>
            + Send
            + 'static,
    {
        if !self.can_start() {
            return;
        }

        self.is_running = true;
        self.last_outcome = None;
        self.status_message = self.t().working.to_string();
        self.log(label.clone());

        let tx = self.result_tx.clone();
        std::thread::spawn(move || {
            let result = op();
            let _ = tx.send(OperationOutcome { label, result });
        });
    }
}
