//! Ядро архиватора
//!
//! Три операции:
//! - упаковать одиночный файл
//! - упаковать папку (плоско или рекурсивно)
//! - распаковать zip архив
//!
//! Каждая операция синхронна, владеет ровно одной сессией архива и
//! освобождает её на любом пути выхода. Варианты без явного пути
//! назначения вычисляют его из входного пути.

mod builder;
mod error;
mod extract;
mod paths;
mod types;
mod walk;

pub use builder::build_archive;
pub use error::{ArchiveError, Result};
pub use extract::extract_zip;
pub use paths::{
    default_archive_path_for_file, default_archive_path_for_folder, default_extraction_folder,
};
pub use types::{ArchiveReport, WalkMode, ZipEntry};
pub use walk::collect_entries;

use std::fs;
use std::io;
use std::path::Path;

/// Упаковать файл в архив `<папка файла>/<имя без расширения>.zip`
pub fn zip_file(path: &Path) -> Result<ArchiveReport> {
    zip_file_to(path, &default_archive_path_for_file(path))
}

/// Упаковать файл в архив по указанному пути
pub fn zip_file_to(path: &Path, archive_path: &Path) -> Result<ArchiveReport> {
    // Источник проверяется до создания файла архива
    let metadata = fs::metadata(path).map_err(|e| source_error(path, e))?;
    if !metadata.is_file() {
        return Err(ArchiveError::NotAFile(path.to_path_buf()));
    }

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "file".to_string());

    let entries = [ZipEntry {
        path: path.to_path_buf(),
        entry_name,
    }];
    build_archive(&entries, archive_path)
}

/// Упаковать папку рекурсивно в архив `<родитель>/<имя папки>.zip`
pub fn zip_folder(path: &Path) -> Result<ArchiveReport> {
    zip_folder_to(path, &default_archive_path_for_folder(path), WalkMode::Recursive)
}

/// Упаковать папку в архив по указанному пути в заданном режиме обхода
pub fn zip_folder_to(path: &Path, archive_path: &Path, mode: WalkMode) -> Result<ArchiveReport> {
    let metadata = fs::metadata(path).map_err(|e| source_error(path, e))?;
    if !metadata.is_dir() {
        return Err(ArchiveError::NotADirectory(path.to_path_buf()));
    }

    let entries = collect_entries(path, mode)?;
    build_archive(&entries, archive_path)
}

/// Распаковать архив в папку `<папка архива>/<имя архива без расширения>`
pub fn unzip_file(archive_path: &Path) -> Result<ArchiveReport> {
    unzip_file_to(archive_path, &default_extraction_folder(archive_path))
}

/// Распаковать архив в указанную папку
pub fn unzip_file_to(archive_path: &Path, dest_root: &Path) -> Result<ArchiveReport> {
    extract_zip(archive_path, dest_root)
}

fn source_error(path: &Path, source: io::Error) -> ArchiveError {
    match source.kind() {
        io::ErrorKind::NotFound => ArchiveError::SourceNotFound(path.to_path_buf()),
        _ => ArchiveError::Read {
            path: path.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_zip_file_uses_default_archive_path() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("report.txt");
        std::fs::write(&source, "Hello").unwrap();

        zip_file(&source).unwrap();
        assert!(dir.path().join("report.zip").is_file());
    }

    #[test]
    fn test_zip_file_missing_source_creates_no_archive() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("nope.txt");

        let result = zip_file(&source);
        assert!(matches!(result, Err(ArchiveError::SourceNotFound(_))));
        assert!(!dir.path().join("nope.zip").exists());
    }

    #[test]
    fn test_zip_file_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let result = zip_file_to(dir.path(), &dir.path().join("out.zip"));
        assert!(matches!(result, Err(ArchiveError::NotAFile(_))));
    }

    #[test]
    fn test_zip_folder_rejects_file() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.txt");
        std::fs::write(&source, "a").unwrap();

        let result = zip_folder(&source);
        assert!(matches!(result, Err(ArchiveError::NotADirectory(_))));
    }

    #[test]
    fn test_zip_folder_default_is_recursive() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("data");
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("a.txt"), "a").unwrap();
        std::fs::write(root.join("sub/c.txt"), "c").unwrap();

        let report = zip_folder(&root).unwrap();
        assert_eq!(report.files_count, 2);
        assert!(dir.path().join("data.zip").is_file());
    }

    #[test]
    fn test_unzip_file_uses_default_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("report.txt");
        std::fs::write(&source, "Hello").unwrap();

        zip_file(&source).unwrap();
        unzip_file(&dir.path().join("report.zip")).unwrap();

        let extracted = dir.path().join("report").join("report.txt");
        assert_eq!(std::fs::read_to_string(extracted).unwrap(), "Hello");
    }
}
