//! Ошибки архиватора

use std::io;
use std::path::PathBuf;

/// Ошибка операции с архивом
///
/// Категории: входные пути, файловая система, формат архива,
/// отказ кодека на отдельной записи, небезопасное имя записи.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("archive not found: {0}")]
    ArchiveNotFound(PathBuf),

    #[error("cannot create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("not a valid zip archive {path}: {source}")]
    InvalidArchive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("archive entry '{name}' failed: {source}")]
    Entry {
        name: String,
        source: zip::result::ZipError,
    },

    #[error("cannot finalize archive {path}: {source}")]
    Finalize {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("archive entry '{name}' escapes the destination directory")]
    UnsafeEntryName { name: String },
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
