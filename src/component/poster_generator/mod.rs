//! 影片縮圖產生元件
//!
//! 掃描影片資料夾，為每支影片擷取第一幀作為縮圖（`<檔名>_poster.jpg`），
//! 已存在的縮圖不會重新產生

mod frame_extractor;
mod main;
mod poster_planner;
mod reporter;

pub use frame_extractor::{FfmpegFrameExtractor, FrameExtractor};
pub use main::{GenerationResult, PosterFailure, PosterGenerator};
pub use poster_planner::{POSTER_SUFFIX, poster_path_for};
pub use reporter::Reporter;
