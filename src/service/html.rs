use std::ffi::OsString;
use std::fs;
use std::path::Path;
use log::info;
use crate::service::error::ConvertError;
use crate::utils::process::run_tool;

/// HTML 服務，透過無頭 Chromium 將 HTML 渲染為 PDF
pub struct HtmlService {
    chromium: String,
}

impl HtmlService {
    pub fn new(chromium: impl Into<String>) -> Self {
        HtmlService {
            chromium: chromium.into(),
        }
    }

    pub fn render_to_pdf(&self, input: &Path, output: &Path) -> Result<String, ConvertError> {
        // Chromium 需要絕對路徑的 file:// URL
        let source = fs::canonicalize(input)?;
        let args = build_chromium_args(&source, output);
        run_tool(&self.chromium, &args)?;
        info!("HTML 渲染為 PDF：{} -> {}", input.display(), output.display());
        Ok("HTML converted to PDF successfully.".to_string())
    }
}

pub fn build_chromium_args(source: &Path, output: &Path) -> Vec<OsString> {
    let mut print_to_pdf = OsString::from("--print-to-pdf=");
    print_to_pdf.push(output);
    vec![
        OsString::from("--headless"),
        OsString::from("--disable-gpu"),
        OsString::from("--no-pdf-header-footer"),
        print_to_pdf,
        OsString::from(file_url(source)),
    ]
}

/// 絕對路徑轉為 file:// URL，每段路徑各自做百分比編碼
pub fn file_url(path: &Path) -> String {
    let segments: Vec<String> = path
        .as_os_str()
        .as_encoded_bytes()
        .split(|b| *b == b'/')
        .map(|segment| urlencoding::encode_binary(segment).into_owned())
        .collect();
    format!("file://{}", segments.join("/"))
}
