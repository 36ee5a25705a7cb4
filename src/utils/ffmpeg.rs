//! Модуль для работы с FFmpeg
//!
//! Этот модуль содержит запуск команд FFmpeg и FFprobe.

use std::ffi::OsStr;
use std::process::Command;

use crate::error::{LingvoClipError, Result};

/// Проверка наличия FFmpeg и FFprobe в PATH
pub fn check_ffmpeg_installed() -> bool {
    let ffmpeg = Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    let ffprobe = Command::new("ffprobe")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false);
    ffmpeg && ffprobe
}

/// Запуск команды FFmpeg.
///
/// Баннер и прогресс подавляются, существующие выходные файлы
/// перезаписываются.
pub fn run_ffmpeg_command<S: AsRef<OsStr>>(args: &[S]) -> Result<()> {
    let mut command = Command::new("ffmpeg");
    command.args(["-hide_banner", "-loglevel", "error", "-y"]);
    command.args(args);
    log::debug!("Running {:?}", command);

    let status = command.status()?;
    if !status.success() {
        return Err(LingvoClipError::Other(format!(
            "FFmpeg command failed with status: {}",
            status
        )));
    }

    Ok(())
}

/// Запуск команды FFprobe, возвращает stdout
pub fn run_ffprobe_command<S: AsRef<OsStr>>(args: &[S]) -> Result<String> {
    let mut command = Command::new("ffprobe");
    command.args(args);
    log::debug!("Running {:?}", command);

    let output = command.output()?;
    if !output.status.success() {
        return Err(LingvoClipError::Other(format!(
            "FFprobe command failed with status: {}",
            output.status
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}
