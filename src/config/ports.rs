use std::io;
use std::path::PathBuf;

// 外部工具路徑，供子行程轉換使用
#[derive(Debug, Clone)]
pub struct ToolPaths {
    pub ffmpeg: String,
    pub chromium: String,
    pub unrar: String,
}

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub log_level: String,
    pub jpeg_quality: u8,
    pub tools: ToolPaths,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
