//! UI для распаковки архива

use crate::app::App;
use eframe::egui;

impl App {
    /// Рендерим режим распаковки
    pub fn render_extract_mode(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        ui.heading(t.extract_title);
        ui.add_space(10.0);

        ui.label(egui::RichText::new(t.extract_hint).color(egui::Color32::GRAY));
        ui.add_space(10.0);

        ui.separator();
        ui.add_space(10.0);

        if ui
            .add_enabled(self.can_start(), egui::Button::new(t.select_archive))
            .clicked()
        {
            self.select_archive_dialog();
        }

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
