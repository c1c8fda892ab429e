use std::fs;
use std::path::Path;
use log::info;
use crate::service::error::ConvertError;

/// PDF 服務，擷取文字並僅輸出至終端
pub struct PdfService;

impl PdfService {
    pub fn new() -> Self {
        PdfService
    }

    pub fn extract_text(&self, input: &Path) -> Result<String, ConvertError> {
        let data = fs::read(input)?;
        let text = pdf_extract::extract_text_from_mem(&data)
            .map_err(|e| ConvertError::Pdf(e.to_string()))?;
        info!("從 PDF 擷取文字：{}，共 {} 字元", input.display(), text.chars().count());
        Ok(format!("Text extracted from PDF: {}", text))
    }
}

impl Default for PdfService {
    fn default() -> Self {
        Self::new()
    }
}
