use std::ffi::OsString;
use std::path::Path;
use log::info;
use crate::service::error::ConvertError;
use crate::utils::process::run_tool;

/// 媒體服務，透過 ffmpeg 將影片音軌轉為 MP3
pub struct MediaService {
    ffmpeg: String,
}

impl MediaService {
    pub fn new(ffmpeg: impl Into<String>) -> Self {
        MediaService {
            ffmpeg: ffmpeg.into(),
        }
    }

    pub fn extract_mp3(&self, input: &Path, output: &Path) -> Result<String, ConvertError> {
        let args = build_mp3_args(input, output);
        run_tool(&self.ffmpeg, &args)?;
        info!("影片轉檔完成：{} -> {}", input.display(), output.display());
        Ok("Video converted to mp3 successfully.".to_string())
    }
}

/// ffmpeg 參數：覆寫輸出、捨棄影像、libmp3lame 編碼
pub fn build_mp3_args(input: &Path, output: &Path) -> Vec<OsString> {
    vec![
        OsString::from("-y"),
        OsString::from("-i"),
        input.as_os_str().to_os_string(),
        OsString::from("-vn"),
        OsString::from("-c:a"),
        OsString::from("libmp3lame"),
        OsString::from("-f"),
        OsString::from("mp3"),
        OsString::from("-loglevel"),
        OsString::from("error"),
        output.as_os_str().to_os_string(),
    ]
}
