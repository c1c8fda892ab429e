use crate::models::conversion::ConversionJob;
use crate::service::error::ConvertError;

// 協作者服務接口，負責實際的格式轉換
pub trait CollaboratorServiceTrait: Send + Sync {
    /// 執行一個轉換工作
    /// # 參數
    /// - job: 協作者種類、輸入路徑與輸出路徑
    /// # 回傳
    /// - 成功時返回要顯示於終端的成功訊息，失敗時返回轉換錯誤
    fn execute(&self, job: &ConversionJob) -> Result<String, ConvertError>;
}
