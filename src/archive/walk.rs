//! Обход папки: сбор файлов для упаковки

use super::error::{ArchiveError, Result};
use super::types::{WalkMode, ZipEntry};
use std::fs;
use std::path::Path;

/// Собрать все файлы папки в список записей будущего архива
///
/// В плоском режиме берутся только обычные файлы верхнего уровня,
/// имя записи - имя файла. В рекурсивном режиме обходится всё поддерево,
/// имя записи - путь от корня с разделителем `/`. Папки не порождают
/// собственных записей. Символьные ссылки не разворачиваются и пропускаются.
pub fn collect_entries(root: &Path, mode: WalkMode) -> Result<Vec<ZipEntry>> {
    let mut entries = Vec::new();
    match mode {
        WalkMode::Flat => collect_flat(root, &mut entries)?,
        WalkMode::Recursive => collect_recursive(root, "", &mut entries)?,
    }
    Ok(entries)
}

fn collect_flat(root: &Path, entries: &mut Vec<ZipEntry>) -> Result<()> {
    for entry in read_dir(root)? {
        let entry = entry.map_err(|e| read_error(root, e))?;
        let file_type = entry.file_type().map_err(|e| read_error(&entry.path(), e))?;

        if file_type.is_file() {
            entries.push(ZipEntry {
                path: entry.path(),
                entry_name: entry.file_name().to_string_lossy().to_string(),
            });
        }
    }
    Ok(())
}

fn collect_recursive(
    current_path: &Path,
    relative_base: &str,
    entries: &mut Vec<ZipEntry>,
) -> Result<()> {
    for entry in read_dir(current_path)? {
        let entry = entry.map_err(|e| read_error(current_path, e))?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();

        // Формируем относительный путь
        let relative_path = if relative_base.is_empty() {
            file_name
        } else {
            format!("{}/{}", relative_base, file_name)
        };

        let file_type = entry.file_type().map_err(|e| read_error(&path, e))?;
        if file_type.is_dir() {
            // Рекурсивно обходим подпапки
            collect_recursive(&path, &relative_path, entries)?;
        } else if file_type.is_file() {
            entries.push(ZipEntry {
                path,
                entry_name: relative_path,
            });
        }
    }
    Ok(())
}

fn read_dir(path: &Path) -> Result<fs::ReadDir> {
    fs::read_dir(path).map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, source: std::io::Error) -> ArchiveError {
    ArchiveError::Read {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_tree(dir: &TempDir) {
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::write(dir.path().join("b.txt"), "b").unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("c.txt"), "c").unwrap();
    }

    #[test]
    fn test_collect_flat_skips_subdirectories() {
        let dir = TempDir::new().unwrap();
        make_tree(&dir);

        let entries = collect_entries(dir.path(), WalkMode::Flat).unwrap();
        let mut names: Vec<&str> = entries.iter().map(|e| e.entry_name.as_str()).collect();
        names.sort();

        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_collect_recursive_preserves_relative_paths() {
        let dir = TempDir::new().unwrap();
        make_tree(&dir);

        let entries = collect_entries(dir.path(), WalkMode::Recursive).unwrap();
        let mut names: Vec<&str> = entries.iter().map(|e| e.entry_name.as_str()).collect();
        names.sort();

        assert_eq!(names, vec!["a.txt", "b.txt", "sub/c.txt"]);

        // Пути источников указывают на реальные файлы
        for entry in &entries {
            assert!(entry.path.is_file());
        }
    }

    #[test]
    fn test_collect_empty_folder() {
        let dir = TempDir::new().unwrap();

        assert!(collect_entries(dir.path(), WalkMode::Flat).unwrap().is_empty());
        assert!(collect_entries(dir.path(), WalkMode::Recursive).unwrap().is_empty());
    }

    #[test]
    fn test_collect_missing_folder_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let result = collect_entries(&missing, WalkMode::Recursive);
        assert!(matches!(result, Err(ArchiveError::Read { .. })));
    }

    #[test]
    fn test_entry_names_never_start_with_slash() {
        let dir = TempDir::new().unwrap();
        make_tree(&dir);

        let entries = collect_entries(dir.path(), WalkMode::Recursive).unwrap();
        for entry in entries {
            assert!(!entry.entry_name.starts_with('/'));
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_recursive_skips_symlinks() {
        let dir = TempDir::new().unwrap();
        make_tree(&dir);

        // Ссылка на файл и ссылка-цикл на сам корень
        std::os::unix::fs::symlink(dir.path().join("a.txt"), dir.path().join("link.txt")).unwrap();
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

        let entries = collect_entries(dir.path(), WalkMode::Recursive).unwrap();
        let mut names: Vec<&str> = entries.iter().map(|e| e.entry_name.as_str()).collect();
        names.sort();

        assert_eq!(names, vec!["a.txt", "b.txt", "sub/c.txt"]);
    }
}
