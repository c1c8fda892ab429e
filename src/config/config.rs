use std::io;
use std::path::Path;

pub const DEFAULT_INPUT_PATH: &str = "./file";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

pub const DEFAULT_FFMPEG: &str = "ffmpeg";
pub const DEFAULT_CHROMIUM: &str = "chromium";
pub const DEFAULT_UNRAR: &str = "unrar";

/// 輸入路徑的種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    File,
    Directory,
}

pub fn validate_input_path(input: &Path) -> io::Result<InputKind> {
    if !input.exists() {
        log::error!("輸入路徑不存在：{}", input.display());
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("輸入路徑 '{}' 不存在", input.display()),
        ));
    }
    let metadata = std::fs::metadata(input)?;
    if metadata.is_dir() {
        Ok(InputKind::Directory)
    } else {
        Ok(InputKind::File)
    }
}

pub fn parse_log_level(log_level: &str) -> log::LevelFilter {
    match log_level {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        "off" => log::LevelFilter::Off,
        _ => log::LevelFilter::Info,
    }
}
