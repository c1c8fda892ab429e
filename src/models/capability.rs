use std::collections::HashMap;
use crate::models::format::TargetFormat;

/// 負責實際轉換的協作者種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ImageRecode,
    PdfText,
    DocxToHtml,
    HtmlToPdf,
    VideoToAudio,
    ZipExtract,
    RarExtract,
}

impl Capability {
    /// 此協作者是否產生輸出檔案（PDF 文字擷取僅輸出至終端）
    pub fn writes_output(&self) -> bool {
        !matches!(self, Capability::PdfText)
    }

    /// 失敗時終端訊息的前綴
    pub fn failure_label(&self) -> &'static str {
        match self {
            Capability::ImageRecode => "Error during image conversion",
            Capability::PdfText => "Error reading PDF",
            Capability::DocxToHtml => "Error converting DOCX to HTML",
            Capability::HtmlToPdf => "Error converting HTML to PDF",
            Capability::VideoToAudio => "Error converting video",
            Capability::ZipExtract => "Error extracting ZIP",
            Capability::RarExtract => "Error extracting RAR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversionPair {
    pub source: String,
    pub target: TargetFormat,
}

impl ConversionPair {
    pub fn new(source: &str, target: TargetFormat) -> Self {
        ConversionPair {
            source: source.to_string(),
            target,
        }
    }
}

const SUPPORTED_PAIRS: [(&str, TargetFormat, Capability); 7] = [
    ("png", TargetFormat::Jpg, Capability::ImageRecode),
    ("pdf", TargetFormat::Txt, Capability::PdfText),
    ("docx", TargetFormat::Html, Capability::DocxToHtml),
    ("html", TargetFormat::Pdf, Capability::HtmlToPdf),
    ("mp4", TargetFormat::Mp3, Capability::VideoToAudio),
    ("zip", TargetFormat::Folder, Capability::ZipExtract),
    ("rar", TargetFormat::Folder, Capability::RarExtract),
];

/// 固定的 (來源, 目標) → 協作者對照表，不在表中的組合即不支援
#[derive(Debug, Clone)]
pub struct CapabilityTable {
    entries: HashMap<ConversionPair, Capability>,
}

impl CapabilityTable {
    pub fn new() -> Self {
        let entries = SUPPORTED_PAIRS
            .iter()
            .map(|(source, target, capability)| (ConversionPair::new(source, *target), *capability))
            .collect();
        CapabilityTable { entries }
    }

    pub fn lookup(&self, source: &str, target: TargetFormat) -> Option<Capability> {
        self.entries.get(&ConversionPair::new(source, target)).copied()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&ConversionPair, &Capability)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CapabilityTable {
    fn default() -> Self {
        Self::new()
    }
}
