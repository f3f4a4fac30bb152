use super::main::GenerationResult;
use console::style;
use log::{error, info, warn};
use std::path::Path;

/// 進度輸出：標準輸出給使用者看，同時寫入 log
#[derive(Debug, Default)]
pub struct Reporter;

impl Reporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn directory_created(&self, dir: &Path) {
        println!("Created directory: {}", dir.display());
        info!("建立縮圖資料夾: {}", dir.display());
    }

    pub fn scanning(&self, root: &Path) {
        println!("{}", style(format!("Scanning {}...", root.display())).dim());
    }

    pub fn generating(&self, video: &Path) {
        println!("Generating poster for: {}", display_name(video));
        info!("產生縮圖: {}", video.display());
    }

    pub fn failed(&self, video: &Path, reason: &anyhow::Error) {
        println!(
            "{}",
            style(format!("Failed to generate poster for {}", display_name(video))).red()
        );
        error!("縮圖產生失敗 {}: {reason:#}", video.display());
    }

    pub fn interrupted(&self) {
        println!("{}", style("Interrupted, stopping after the current file.").yellow());
        warn!("收到中斷信號，停止掃描");
    }

    pub fn summary(&self, result: &GenerationResult) {
        println!(
            "{}",
            style(format!("Done. Generated {} new posters.", result.generated)).green()
        );

        info!(
            "縮圖任務完成 - 影片: {}, 新增: {}, 略過: {}, 失敗: {}",
            result.scanned,
            result.generated,
            result.skipped,
            result.failures.len()
        );
        if !result.failures.is_empty() {
            warn!("{} 個影片無法產生縮圖", result.failures.len());
        }
    }
}

fn display_name(video: &Path) -> String {
    video.file_name().map_or_else(
        || video.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
