//! Модуль приложения - состояние и логика

mod actions;
mod event_handler;
mod state;

pub use state::{App, Mode};
