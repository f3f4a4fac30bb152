pub mod load;
pub mod types;

pub use load::SETTINGS_FILE;
pub use types::{
    Config, DEFAULT_POSTER_DIR_NAME, DEFAULT_VIDEO_EXTENSIONS, DEFAULT_VIDEO_ROOT, POSTER_QUALITY,
    POSTER_WIDTH, UserSettings,
};
