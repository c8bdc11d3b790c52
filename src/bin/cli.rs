//! Toolza Zip CLI - консольная версия архиватора

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use toolza_zipper::archive::{self, ArchiveReport, WalkMode};
use toolza_zipper::utils::format_size;

#[derive(Parser)]
#[command(name = "toolza_zip_cli")]
#[command(author = "toolza")]
#[command(version = "1.0")]
#[command(about = "Упаковка и распаковка zip архивов", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Упаковать одиночный файл в zip
    ZipFile {
        /// Путь к файлу
        #[arg(required = true)]
        path: PathBuf,

        /// Путь создаваемого архива (по умолчанию рядом с файлом)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Упаковать папку в zip
    ZipFolder {
        /// Путь к папке
        #[arg(required = true)]
        path: PathBuf,

        /// Путь создаваемого архива (по умолчанию рядом с папкой)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Только файлы верхнего уровня, без подпапок
        #[arg(long)]
        flat: bool,
    },

    /// Распаковать zip архив
    Unzip {
        /// Путь к архиву
        #[arg(required = true)]
        archive: PathBuf,

        /// Папка назначения (по умолчанию рядом с архивом)
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },
}

fn run(command: Commands) -> archive::Result<ArchiveReport> {
    match command {
        Commands::ZipFile { path, output } => match output {
            Some(output) => archive::zip_file_to(&path, &output),
            None => archive::zip_file(&path),
        },
        Commands::ZipFolder { path, output, flat } => {
            let mode = if flat {
                WalkMode::Flat
            } else {
                WalkMode::Recursive
            };
            let output =
                output.unwrap_or_else(|| archive::default_archive_path_for_folder(&path));
            archive::zip_folder_to(&path, &output, mode)
        }
        Commands::Unzip { archive, dest } => match dest {
            Some(dest) => archive::unzip_file_to(&archive, &dest),
            None => archive::unzip_file(&archive),
        },
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(report) => {
            println!(
                "✅ Готово: {} файл(ов), {}",
                report.files_count,
                format_size(report.total_size)
            );
        }
        Err(e) => {
            eprintln!("❌ Ошибка: {}", e);
            std::process::exit(1);
        }
    }
}
