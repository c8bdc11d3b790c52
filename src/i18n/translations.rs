//! Переводы строк интерфейса

use super::Translations;

/// Русский
pub static RU: Translations = Translations {
    app_title: "Toolza Zipper - Архиватор",
    mode_zip: "Упаковка",
    mode_extract: "Распаковка",

    zip_title: "Упаковка в zip",
    zip_hint: "Выберите файл или папку - архив появится рядом с источником",
    select_file_to_zip: "Выбрать файл для упаковки",
    select_folder_to_zip: "Выбрать папку для упаковки",
    recursive_option: "Включая подпапки",
    recursive_tooltip: "Если выключено, в архив попадут только файлы верхнего уровня",

    extract_title: "Распаковка zip",
    extract_hint: "Выберите архив - содержимое появится в папке с именем архива",
    select_archive: "Выбрать архив для распаковки",

    status: "Статус:",
    log: "Лог",
    clear: "Очистить",
    log_empty: "Лог пуст",
    ready: "Готов",
    working: "Выполняется...",
    files_suffix: "файл(ов)",
};

/// Украинский
pub static UK: Translations = Translations {
    app_title: "Toolza Zipper - Архіватор",
    mode_zip: "Пакування",
    mode_extract: "Розпакування",

    zip_title: "Пакування в zip",
    zip_hint: "Оберіть файл або теку - архів з'явиться поруч із джерелом",
    select_file_to_zip: "Обрати файл для пакування",
    select_folder_to_zip: "Обрати теку для пакування",
    recursive_option: "Разом із підтеками",
    recursive_tooltip: "Якщо вимкнено, до архіву потраплять лише файли верхнього рівня",

    extract_title: "Розпакування zip",
    extract_hint: "Оберіть архів - вміст з'явиться в теці з іменем архіву",
    select_archive: "Обрати архів для розпакування",

    status: "Статус:",
    log: "Лог",
    clear: "Очистити",
    log_empty: "Лог порожній",
    ready: "Готовий",
    working: "Виконується...",
    files_suffix: "файл(ів)",
};

/// Английский
pub static EN: Translations = Translations {
    app_title: "Toolza Zipper",
    mode_zip: "Zip",
    mode_extract: "Unzip",

    zip_title: "Zip a file or folder",
    zip_hint: "Pick a file or folder - the archive is created next to the source",
    select_file_to_zip: "Select file to zip",
    select_folder_to_zip: "Select folder to zip",
    recursive_option: "Include subfolders",
    recursive_tooltip: "When off, only top-level files go into the archive",

    extract_title: "Unzip an archive",
    extract_hint: "Pick an archive - contents go into a folder named after it",
    select_archive: "Select file to unzip",

    status: "Status:",
    log: "Log",
    clear: "Clear",
    log_empty: "Log is empty",
    ready: "Ready",
    working: "Working...",
    files_suffix: "file(s)",
};
