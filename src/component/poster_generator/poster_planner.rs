use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const POSTER_SUFFIX: &str = "_poster.jpg";

/// 由影片路徑推算縮圖路徑：`<poster_dir>/<stem>_poster.jpg`
///
/// 檔名原樣保留（大小寫、空白、unicode），不做正規化也不處理撞名。
#[must_use]
pub fn poster_path_for(video_path: &Path, poster_dir: &Path) -> Option<PathBuf> {
    let stem = video_path.file_stem()?;
    let mut poster_name = OsString::from(stem);
    poster_name.push(POSTER_SUFFIX);
    Some(poster_dir.join(poster_name))
}
