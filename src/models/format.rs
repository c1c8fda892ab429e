use std::fmt;
use std::path::Path;

/// 依副檔名取得小寫格式標籤，不檢查檔案內容；無副檔名時回傳空字串
pub fn detect_format(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// 選單中可選的目標格式，順序即選單順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetFormat {
    Jpg,
    Png,
    Txt,
    Html,
    Pdf,
    Mp3,
    Folder,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 7] = [
        TargetFormat::Jpg,
        TargetFormat::Png,
        TargetFormat::Txt,
        TargetFormat::Html,
        TargetFormat::Pdf,
        TargetFormat::Mp3,
        TargetFormat::Folder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFormat::Jpg => "jpg",
            TargetFormat::Png => "png",
            TargetFormat::Txt => "txt",
            TargetFormat::Html => "html",
            TargetFormat::Pdf => "pdf",
            TargetFormat::Mp3 => "mp3",
            TargetFormat::Folder => "folder",
        }
    }

    /// 選單編號 "1".."7" 對應的目標格式，其他輸入一律無效
    pub fn from_selector(selector: &str) -> Option<TargetFormat> {
        match selector {
            "1" => Some(TargetFormat::Jpg),
            "2" => Some(TargetFormat::Png),
            "3" => Some(TargetFormat::Txt),
            "4" => Some(TargetFormat::Html),
            "5" => Some(TargetFormat::Pdf),
            "6" => Some(TargetFormat::Mp3),
            "7" => Some(TargetFormat::Folder),
            _ => None,
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_and_menu_order_agree() {
        for (i, target) in TargetFormat::ALL.iter().enumerate() {
            let selector = (i + 1).to_string();
            assert_eq!(TargetFormat::from_selector(&selector), Some(*target));
        }
    }

    #[test]
    fn dotfile_has_no_extension() {
        assert_eq!(detect_format(Path::new("dir/.bashrc")), "");
    }
}
