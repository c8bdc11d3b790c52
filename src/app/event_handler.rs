//! Обработка результатов диалогов и операций

use super::state::{App, DialogResult, OperationOutcome};
use toolza_zipper::utils::format_size;

impl App {
    /// Обработать результаты файловых диалогов
    pub fn process_dialog_results(&mut self) {
        // Собираем все результаты сначала, чтобы освободить borrow
        let results: Vec<DialogResult> = {
            let mut res = Vec::new();
            while let Ok(result) = self.dialog_rx.try_recv() {
                res.push(result);
            }
            res
        };

        for result in results {
            match result {
                DialogResult::FileToZip(path) => self.start_zip_file(path),
                DialogResult::FolderToZip(path) => self.start_zip_folder(path),
                DialogResult::ArchiveToExtract(path) => self.start_extract(path),
            }
        }
    }

    /// Обработать завершённые операции с рабочего потока
    pub fn process_operation_results(&mut self) {
        let outcomes: Vec<OperationOutcome> = {
            let mut res = Vec::new();
            while let Ok(outcome) = self.result_rx.try_recv() {
                res.push(outcome);
            }
            res
        };

        for outcome in outcomes {
            self.is_running = false;
            self.status_message = self.t().ready.to_string();

            match outcome.result {
                Ok(report) => {
                    let message = format!(
                        "✅ {}: {} {}, {}",
                        outcome.label,
                        report.files_count,
                        self.t().files_suffix,
                        format_size(report.total_size)
                    );
                    self.log(message.clone());
                    self.last_outcome = Some(message);
                }
                Err(e) => {
                    let message = format!("❌ {}: {}", outcome.label, e);
                    self.log(message.clone());
                    self.last_outcome = Some(message);
                }
            }
        }
    }
}
