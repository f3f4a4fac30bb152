use crate::config::Config;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 資料夾路徑文字中只要包含 `excluded_name` 就排除
///
/// 這是字串比對而非路徑比對：`my_posters_archive` 也會被排除，
/// 影片根目錄本身的路徑若包含此名稱，整個掃描都不會有結果。
#[must_use]
pub fn is_excluded_dir(dir: &Path, excluded_name: &str) -> bool {
    !excluded_name.is_empty() && dir.to_string_lossy().contains(excluded_name)
}

/// 副檔名（轉小寫、含點）是否在允許清單中
#[must_use]
pub fn has_allowed_extension(path: &Path, allowed_extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let dotted = format!(".{}", ext.to_lowercase());
            allowed_extensions
                .iter()
                .any(|allowed| allowed.to_lowercase() == dotted)
        })
}

fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// 遞迴掃描影片資料夾，逐一產出符合條件的影片路徑
///
/// 迭代器是惰性的，只能走訪一次，順序依檔案系統列舉結果而定。
pub fn scan_candidates(config: &Config) -> impl Iterator<Item = PathBuf> + use<> {
    let excluded_name = config.poster_dir_name();
    let allowed_extensions = config.allowed_extensions.clone();

    WalkDir::new(&config.video_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |entry| {
            // 根目錄可能是符號連結，file_type 不會是資料夾
            let is_dir = entry.depth() == 0 || entry.file_type().is_dir();
            !(is_dir && is_excluded_dir(entry.path(), &excluded_name))
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                match err.path() {
                    Some(path) => warn!("無法讀取 {}: {err}", path.display()),
                    None => warn!("掃描錯誤: {err}"),
                }
                None
            }
        })
        .filter(is_regular_file)
        .filter(move |entry| has_allowed_extension(entry.path(), &allowed_extensions))
        .map(DirEntry::into_path)
}
