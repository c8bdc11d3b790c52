//! Распаковка zip архива

use super::error::{ArchiveError, Result};
use super::types::ArchiveReport;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

/// Распаковать zip архив в указанную папку
///
/// Каждая запись пишется в `dest_root/<имя записи>`, недостающие
/// родительские папки создаются, существующие файлы перезаписываются
/// (при дубликатах имён побеждает последняя запись). Запись, чьё имя
/// выводит путь за пределы `dest_root`, прерывает всю операцию.
pub fn extract_zip(archive_path: &Path, dest_root: &Path) -> Result<ArchiveReport> {
    let file = File::open(archive_path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ArchiveError::ArchiveNotFound(archive_path.to_path_buf()),
        _ => ArchiveError::Read {
            path: archive_path.to_path_buf(),
            source: e,
        },
    })?;

    let mut archive =
        zip::ZipArchive::new(BufReader::new(file)).map_err(|e| ArchiveError::InvalidArchive {
            path: archive_path.to_path_buf(),
            source: e,
        })?;

    fs::create_dir_all(dest_root).map_err(|e| ArchiveError::CreateDir {
        path: dest_root.to_path_buf(),
        source: e,
    })?;

    let mut report = ArchiveReport::default();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| ArchiveError::Entry {
            name: format!("#{}", i),
            source: e,
        })?;

        // Отклоняем имена с `..` или абсолютным путём
        let Some(relative) = entry.enclosed_name() else {
            return Err(ArchiveError::UnsafeEntryName {
                name: entry.name().to_string(),
            });
        };
        let outpath = dest_root.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&outpath).map_err(|e| ArchiveError::CreateDir {
                path: outpath.clone(),
                source: e,
            })?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            fs::create_dir_all(parent).map_err(|e| ArchiveError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut outfile = File::create(&outpath).map_err(|e| ArchiveError::Write {
            path: outpath.clone(),
            source: e,
        })?;
        let size = io::copy(&mut entry, &mut outfile).map_err(|e| ArchiveError::Write {
            path: outpath.clone(),
            source: e,
        })?;

        report.files_count += 1;
        report.total_size += size;

        // Восстанавливаем права на Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                let _ = fs::set_permissions(&outpath, fs::Permissions::from_mode(mode));
            }
        }
    }

    Ok(report)
}
