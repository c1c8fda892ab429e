use std::io;
use std::path::PathBuf;
use crate::config::config::{
    DEFAULT_CHROMIUM, DEFAULT_FFMPEG, DEFAULT_INPUT_PATH, DEFAULT_JPEG_QUALITY, DEFAULT_LOG_LEVEL,
    DEFAULT_UNRAR,
};
use crate::config::ports::{AppConfig, ConfigPort, ToolPaths};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// 預設配置適配器，輸入路徑固定為 ./file
pub struct DefaultConfigAdapter;

impl DefaultConfigAdapter {
    pub fn new() -> Self {
        DefaultConfigAdapter
    }
}

impl Default for DefaultConfigAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(AppConfig {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            tools: ToolPaths {
                ffmpeg: DEFAULT_FFMPEG.to_string(),
                chromium: DEFAULT_CHROMIUM.to_string(),
                unrar: DEFAULT_UNRAR.to_string(),
            },
        })
    }
}
