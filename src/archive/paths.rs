//! Вычисление путей по умолчанию
//!
//! Чистые функции над строками путей, без обращения к файловой системе.

use std::path::{Path, PathBuf};

/// Путь архива по умолчанию для одиночного файла: `<папка>/<имя без расширения>.zip`
pub fn default_archive_path_for_file(file: &Path) -> PathBuf {
    file.with_extension("zip")
}

/// Путь архива по умолчанию для папки: `<родитель>/<имя папки>.zip`
pub fn default_archive_path_for_folder(folder: &Path) -> PathBuf {
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "folder".to_string());

    match folder.parent() {
        Some(parent) => parent.join(format!("{}.zip", name)),
        None => PathBuf::from(format!("{}.zip", name)),
    }
}

/// Папка распаковки по умолчанию: `<папка архива>/<имя архива без расширения>`
pub fn default_extraction_folder(zip_path: &Path) -> PathBuf {
    zip_path.with_extension("")
}
