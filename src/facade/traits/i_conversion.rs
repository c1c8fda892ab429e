use std::io::{self, BufRead};
use crate::models::conversion::RunOutcome;

// Facade 接口，負責協調整個轉換流程
pub trait ConversionFacadeTrait {
    /// 對設定的輸入路徑執行偵測、提示與分派
    /// # 參數
    /// - input: 操作者輸入來源，每個檔案讀取一行
    /// # 回傳
    /// - 本次執行的結果；走訪時的 I/O 錯誤已顯示於終端並以 `RunOutcome::Failed` 回報
    fn run(&mut self, input: &mut dyn BufRead) -> io::Result<RunOutcome>;
}
