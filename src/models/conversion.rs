use std::path::{Path, PathBuf};
use crate::models::capability::Capability;
use crate::models::format::TargetFormat;

/// 單一檔案的轉換請求，建立後立即交給分派器
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub source_format: String,
    pub target_format: TargetFormat,
    pub file_path: PathBuf,
}

/// 分派器交給協作者執行的工作
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub capability: Capability,
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
}

/// 一次執行的結果，供入口記錄使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    InputMissing,
    EmptyDirectory,
    Completed { dispatched: usize, unsupported: usize },
    Halted { processed: usize },
    /// 走訪輸入時發生 I/O 錯誤（例如權限不足），已顯示於終端
    Failed { reason: String },
}

/// 輸出路徑：`<dir>/<檔名去副檔名>_converted.<目標格式>`，同名檔案直接覆寫
pub fn output_path_for(input: &Path, target: TargetFormat) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    parent.join(format!("{}_converted.{}", stem, target.as_str()))
}
