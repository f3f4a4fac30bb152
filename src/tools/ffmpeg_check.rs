use log::debug;
use std::process::{Command, Stdio};

/// 執行 `<program> -version` 確認工具可以啟動
///
/// 只要程序能啟動即視為可用，不看結束狀態碼；
/// 找不到執行檔或無法執行時回傳 `false`。
#[must_use]
pub fn is_tool_available(program: &str) -> bool {
    match Command::new(program)
        .arg("-version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) => {
            debug!("{program} -version 結束狀態: {status}");
            true
        }
        Err(e) => {
            debug!("無法啟動 {program}: {e}");
            false
        }
    }
}
