use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, MAIN_SEPARATOR_STR};
use log::{info, warn};
use zip::ZipArchive;
use crate::service::error::ConvertError;
use crate::utils::process::run_tool;

/// 壓縮檔服務，將 ZIP 或 RAR 解壓至輸出目錄
pub struct ArchiveService {
    unrar: String,
}

impl ArchiveService {
    pub fn new(unrar: impl Into<String>) -> Self {
        ArchiveService {
            unrar: unrar.into(),
        }
    }

    /// 解壓全部項目，已存在的檔案直接覆寫
    pub fn extract_zip(&self, input: &Path, output_dir: &Path) -> Result<String, ConvertError> {
        let file = File::open(input)?;
        let mut archive = ZipArchive::new(file)?;
        fs::create_dir_all(output_dir)?;

        let mut extracted = 0usize;
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let enclosed_name = match entry.enclosed_name() {
                Some(path) => path,
                None => {
                    warn!("略過不安全的壓縮項目：{}", entry.name());
                    continue;
                }
            };
            let out_path = output_dir.join(enclosed_name);

            if entry.is_dir() {
                fs::create_dir_all(&out_path)?;
            } else {
                if let Some(parent) = out_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut out_file = File::create(&out_path)?;
                io::copy(&mut entry, &mut out_file)?;
                extracted += 1;
            }
        }

        info!("ZIP 解壓完成：{} -> {}，共 {} 個檔案", input.display(), output_dir.display(), extracted);
        Ok("ZIP file extracted successfully.".to_string())
    }

    pub fn extract_rar(&self, input: &Path, output_dir: &Path) -> Result<String, ConvertError> {
        fs::create_dir_all(output_dir)?;
        let args = build_unrar_args(input, output_dir);
        run_tool(&self.unrar, &args)?;
        info!("RAR 解壓完成：{} -> {}", input.display(), output_dir.display());
        Ok("RAR file extracted successfully.".to_string())
    }
}

/// unrar 以結尾分隔符號辨識目的地為目錄
pub fn build_unrar_args(input: &Path, output_dir: &Path) -> Vec<OsString> {
    let mut destination = output_dir.as_os_str().to_os_string();
    if !destination.as_encoded_bytes().ends_with(MAIN_SEPARATOR_STR.as_bytes()) {
        destination.push(MAIN_SEPARATOR_STR);
    }
    vec![
        OsString::from("x"),
        OsString::from("-o+"),
        OsString::from("-y"),
        input.as_os_str().to_os_string(),
        destination,
    ]
}
