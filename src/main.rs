//! Toolza Zipper GUI - графический интерфейс архиватора

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use app::App;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Toolza Zipper - Архиватор",
        options,
        Box::new(|_cc| Ok(Box::new(App::new()))),
    )
}
