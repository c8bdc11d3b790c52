//! Упаковка записей в zip архив

use super::error::{ArchiveError, Result};
use super::types::{ArchiveReport, ZipEntry};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Записать список записей в zip архив
///
/// Содержимое каждого файла потоково копируется в свою запись архива
/// (deflate, уровень сжатия по умолчанию). Первая же ошибка прерывает
/// операцию; сессия записи освобождается на любом пути выхода, частично
/// записанный файл архива при этом может остаться на диске.
pub fn build_archive(entries: &[ZipEntry], archive_path: &Path) -> Result<ArchiveReport> {
    if let Some(parent) = archive_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ArchiveError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let file = File::create(archive_path).map_err(|e| ArchiveError::Write {
        path: archive_path.to_path_buf(),
        source: e,
    })?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut report = ArchiveReport::default();
    for entry in entries {
        let source = File::open(&entry.path).map_err(|e| ArchiveError::Read {
            path: entry.path.clone(),
            source: e,
        })?;

        writer
            .start_file(entry.entry_name.as_str(), options)
            .map_err(|e| ArchiveError::Entry {
                name: entry.entry_name.clone(),
                source: e,
            })?;

        let size =
            io::copy(&mut BufReader::new(source), &mut writer).map_err(|e| ArchiveError::Write {
                path: archive_path.to_path_buf(),
                source: e,
            })?;

        report.files_count += 1;
        report.total_size += size;
    }

    // Финализация пишет центральный каталог, ровно один раз
    let mut inner = writer.finish().map_err(|e| ArchiveError::Finalize {
        path: archive_path.to_path_buf(),
        source: e,
    })?;
    inner.flush().map_err(|e| ArchiveError::Write {
        path: archive_path.to_path_buf(),
        source: e,
    })?;

    Ok(report)
}
