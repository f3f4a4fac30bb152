use crate::config::types::DEFAULT_FFMPEG_BINARY;
use crate::tools::is_tool_available;
use anyhow::{Context, Result, bail};
use std::path::Path;
use std::process::{Command, Stdio};

/// 擷取影片第一幀的外部能力，測試時可替換成假的實作
pub trait FrameExtractor {
    /// 工具是否能夠啟動
    fn is_available(&self) -> bool;

    /// 擷取第一幀並輸出為 JPEG，失敗時 `Err` 帶有原因
    fn extract_first_frame(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        quality: u8,
    ) -> Result<()>;
}

pub struct FfmpegFrameExtractor {
    program: String,
}

impl FfmpegFrameExtractor {
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    /// 建立 ffmpeg 指令：從 0 秒取 1 幀，寬度縮放並保持比例，覆寫既有檔案
    #[must_use]
    pub fn build_command(&self, input: &Path, output: &Path, width: u32, quality: u8) -> Command {
        let mut cmd = Command::new(&self.program);

        cmd.args(["-hide_banner", "-nostdin", "-loglevel", "error", "-i"]);
        cmd.arg(input);
        cmd.args(["-ss", "00:00:00.000", "-vframes", "1", "-vf"]);
        cmd.arg(format!("scale={width}:-1"));
        cmd.arg("-q:v");
        cmd.arg(quality.to_string());
        cmd.arg("-y");
        cmd.arg(output);

        cmd
    }
}

impl Default for FfmpegFrameExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_FFMPEG_BINARY)
    }
}

impl FrameExtractor for FfmpegFrameExtractor {
    fn is_available(&self) -> bool {
        is_tool_available(&self.program)
    }

    fn extract_first_frame(
        &self,
        input: &Path,
        output: &Path,
        width: u32,
        quality: u8,
    ) -> Result<()> {
        let result = self
            .build_command(input, output, width, quality)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to run {}: {}", self.program, input.display()))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let reason = stderr.trim();
            if reason.is_empty() {
                bail!("{} exited with {}", self.program, result.status);
            }
            bail!("{} exited with {}: {reason}", self.program, result.status);
        }

        Ok(())
    }
}
