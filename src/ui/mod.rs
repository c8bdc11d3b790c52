//! Модуль пользовательского интерфейса

mod extract_view;
mod zip_view;

use crate::app::{App, Mode};
use eframe::egui;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Обрабатываем результаты файловых диалогов
        self.process_dialog_results();

        // Обрабатываем завершённые операции
        self.process_operation_results();

        // Запрашиваем перерисовку при активной операции (раз в секунду, не чаще!)
        if self.is_running {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }

        // Боковая панель
        self.render_sidebar(ctx);

        // Нижняя панель с логом (фиксированная высота)
        self.render_log_panel(ctx);

        // Основная панель (занимает оставшееся место)
        self.render_main_panel(ctx);
    }
}

impl App {
    fn render_sidebar(&mut self, ctx: &egui::Context) {
        let t = self.t();

        egui::SidePanel::left("mode_panel")
            .resizable(true)
            .min_width(120.0)
            .default_width(160.0)
            .max_width(300.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.heading(t.app_title);
                ui.add_space(10.0);

                ui.selectable_value(&mut self.mode, Mode::Zip, format!("🗜 {}", t.mode_zip));
                ui.selectable_value(
                    &mut self.mode,
                    Mode::Extract,
                    format!("📦 {}", t.mode_extract),
                );

                ui.add_space(20.0);
                ui.separator();

                ui.add_space(10.0);
                ui.label(t.status);

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(&self.status_message);
                    });
            });
    }

    fn render_log_panel(&mut self, ctx: &egui::Context) {
        let t = self.t();

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .min_height(60.0)
            .default_height(100.0)
            .max_height(300.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(t.log);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(t.clear).clicked() {
                            self.log_messages.clear();
                        }
                    });
                });

                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in &self.log_messages {
                            ui.label(msg);
                        }
                        if self.log_messages.is_empty() {
                            ui.colored_label(egui::Color32::GRAY, t.log_empty);
                        }
                    });
            });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Кнопки выбора языка вверху
            self.render_language_selector(ui);

            ui.separator();
            ui.add_space(5.0);

            match self.mode {
                Mode::Zip => self.render_zip_mode(ui),
                Mode::Extract => self.render_extract_mode(ui),
            }
        });
    }

    fn render_language_selector(&mut self, ui: &mut egui::Ui) {
        use toolza_zipper::i18n::Language;

        ui.horizontal(|ui| {
            ui.label("🌐");
            for lang in Language::all() {
                let text = format!("{} {}", lang.flag(), lang.native_name());
                let selected = self.language == *lang;

                if ui.selectable_label(selected, text).clicked() {
                    self.language = *lang;
                }
            }
        });
    }

    /// Итог последней операции (общий для обоих режимов)
    pub(crate) fn render_outcome(&self, ui: &mut egui::Ui) {
        if let Some(ref outcome) = self.last_outcome {
            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            let color = if outcome.starts_with('✅') {
                egui::Color32::from_rgb(100, 200, 100)
            } else if outcome.starts_with('❌') {
                egui::Color32::from_rgb(200, 100, 100)
            } else {
                egui::Color32::WHITE
            };

            ui.label(egui::RichText::new(outcome).color(color));
        }
    }
}
