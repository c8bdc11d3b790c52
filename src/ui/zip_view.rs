//! UI для упаковки файла или папки

use crate::app::App;
use eframe::egui;

impl App {
    /// Рендерим режим упаковки
    pub fn render_zip_mode(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        ui.heading(t.zip_title);
        ui.add_space(10.0);

        ui.label(egui::RichText::new(t.zip_hint).color(egui::Color32::GRAY));
        ui.add_space(10.0);

        ui.separator();
        ui.add_space(10.0);

        // === Упаковка файла ===
        if ui
            .add_enabled(self.can_start(), egui::Button::new(t.select_file_to_zip))
            .clicked()
        {
            self.select_file_to_zip_dialog();
        }

        ui.add_space(15.0);

        // === Упаковка папки ===
        if ui
            .add_enabled(self.can_start(), egui::Button::new(t.select_folder_to_zip))
            .clicked()
        {
            self.select_folder_to_zip_dialog();
        }

        ui.add_space(5.0);

        ui.checkbox(&mut self.recursive, t.recursive_option)
            .on_hover_text(t.recursive_tooltip);

        if self.is_running {
            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new(t.working).color(egui::Color32::YELLOW));
            });
        }

        self.render_outcome(ui);
    }
}
