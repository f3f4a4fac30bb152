mod ffmpeg_check;
mod path_validator;
mod video_scanner;

pub use ffmpeg_check::is_tool_available;
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
pub use video_scanner::{has_allowed_extension, is_excluded_dir, scan_candidates};
