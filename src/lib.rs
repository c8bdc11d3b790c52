//! Toolza Zipper - простая упаковка и распаковка zip архивов
//!
//! Общая библиотека для GUI и CLI версий.
//!
//! # Модули
//! - `archive` - ядро архиватора (упаковка файла/папки, распаковка)
//! - `utils` - вспомогательные функции
//! - `i18n` - интернационализация (русский, украинский, английский)

pub mod archive;
pub mod i18n;
pub mod utils;
