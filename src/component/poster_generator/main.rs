use super::frame_extractor::{FfmpegFrameExtractor, FrameExtractor};
use super::poster_planner::poster_path_for;
use super::reporter::Reporter;
use crate::config::Config;
use crate::tools::{ensure_directory_exists, scan_candidates, validate_directory_exists};
use anyhow::{Result, bail};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 單一影片的失敗紀錄
#[derive(Debug)]
pub struct PosterFailure {
    pub video_path: PathBuf,
    pub reason: String,
}

/// 縮圖產生結果
#[derive(Debug, Default)]
pub struct GenerationResult {
    pub scanned: usize,
    pub generated: usize,
    pub skipped: usize,
    pub failures: Vec<PosterFailure>,
    pub interrupted: bool,
}

/// 影片縮圖產生器
///
/// 流程：
/// 1. 確認擷取工具可用（否則中止，不寫入任何檔案）
/// 2. 確保縮圖資料夾存在
/// 3. 掃描影片資料夾，排除縮圖資料夾
/// 4. 縮圖不存在時擷取第一幀
/// 5. 輸出統計
pub struct PosterGenerator<E = FfmpegFrameExtractor> {
    config: Config,
    extractor: E,
    reporter: Reporter,
    shutdown_signal: Arc<AtomicBool>,
}

impl PosterGenerator<FfmpegFrameExtractor> {
    #[must_use]
    pub fn with_ffmpeg(config: Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        let extractor = FfmpegFrameExtractor::new(&config.ffmpeg_binary);
        Self::new(config, extractor, shutdown_signal)
    }
}

impl<E: FrameExtractor> PosterGenerator<E> {
    pub const fn new(config: Config, extractor: E, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self {
            config,
            extractor,
            reporter: Reporter::new(),
            shutdown_signal,
        }
    }

    #[must_use]
    pub const fn extractor(&self) -> &E {
        &self.extractor
    }

    pub fn run(&self) -> Result<GenerationResult> {
        if !self.extractor.is_available() {
            bail!("FFmpeg is not installed or not in PATH.");
        }

        validate_directory_exists(&self.config.video_root)?;

        if ensure_directory_exists(&self.config.poster_dir)? {
            self.reporter.directory_created(&self.config.poster_dir);
        }

        self.reporter.scanning(&self.config.video_root);

        let mut result = GenerationResult::default();

        for video_path in scan_candidates(&self.config) {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                self.reporter.interrupted();
                result.interrupted = true;
                break;
            }

            result.scanned += 1;
            self.process_video(video_path, &mut result);
        }

        self.reporter.summary(&result);

        Ok(result)
    }

    fn process_video(&self, video_path: PathBuf, result: &mut GenerationResult) {
        let Some(poster_path) = poster_path_for(&video_path, &self.config.poster_dir) else {
            debug!("無法推算縮圖檔名: {}", video_path.display());
            return;
        };

        if poster_path.exists() {
            debug!("縮圖已存在，略過: {}", poster_path.display());
            result.skipped += 1;
            return;
        }

        self.reporter.generating(&video_path);

        match self.extractor.extract_first_frame(
            &video_path,
            &poster_path,
            self.config.poster_width,
            self.config.quality,
        ) {
            Ok(()) => result.generated += 1,
            Err(e) => {
                self.reporter.failed(&video_path, &e);
                result.failures.push(PosterFailure {
                    video_path,
                    reason: format!("{e:#}"),
                });
            }
        }
    }
}
