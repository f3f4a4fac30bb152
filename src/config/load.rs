use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// 設定檔位於程式執行的當前目錄
pub const SETTINGS_FILE: &str = "poster_settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// 讀取指定的設定檔，檔案不存在時使用預設值
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = Self::load_settings(path)?;
        Ok(Self::from_settings(settings))
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
