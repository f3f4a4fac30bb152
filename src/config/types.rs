use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 預設掃描的影片資料夾
pub const DEFAULT_VIDEO_ROOT: &str = "assets/videos";
/// 預設輸出資料夾名稱（位於影片資料夾底下）
pub const DEFAULT_POSTER_DIR_NAME: &str = "posters";
/// 支援的影片副檔名
pub const DEFAULT_VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".mov"];
/// 縮圖寬度（高度依原始比例計算）
pub const POSTER_WIDTH: u32 = 600;
/// ffmpeg `-q:v` 品質參數（1-31，越小越好）
pub const POSTER_QUALITY: u8 = 5;
pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";

/// 使用者設定檔內容，所有欄位皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub video_root: Option<PathBuf>,
    pub poster_dir: Option<PathBuf>,
    pub ffmpeg_binary: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub video_root: PathBuf,
    pub poster_dir: PathBuf,
    pub allowed_extensions: Vec<String>,
    pub poster_width: u32,
    pub quality: u8,
    pub ffmpeg_binary: String,
}

impl Config {
    /// 以指定的影片資料夾建立設定，輸出資料夾為 `<video_root>/posters`
    #[must_use]
    pub fn with_video_root(video_root: &Path) -> Self {
        Self {
            video_root: video_root.to_path_buf(),
            poster_dir: video_root.join(DEFAULT_POSTER_DIR_NAME),
            allowed_extensions: DEFAULT_VIDEO_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            poster_width: POSTER_WIDTH,
            quality: POSTER_QUALITY,
            ffmpeg_binary: DEFAULT_FFMPEG_BINARY.to_string(),
        }
    }

    /// 套用設定檔中有填寫的欄位
    #[must_use]
    pub fn from_settings(settings: UserSettings) -> Self {
        let video_root = settings
            .video_root
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VIDEO_ROOT));
        let mut config = Self::with_video_root(&video_root);

        if let Some(poster_dir) = settings.poster_dir {
            config.poster_dir = poster_dir;
        }
        if let Some(ffmpeg_binary) = settings.ffmpeg_binary {
            config.ffmpeg_binary = ffmpeg_binary;
        }

        config
    }

    /// 輸出資料夾的最後一段名稱，掃描時用來排除資料夾
    #[must_use]
    pub fn poster_dir_name(&self) -> String {
        self.poster_dir
            .file_name()
            .map_or_else(
                || DEFAULT_POSTER_DIR_NAME.to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_video_root(Path::new(DEFAULT_VIDEO_ROOT))
    }
}
