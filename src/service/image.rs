use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use image::codecs::jpeg::JpegEncoder;
use log::info;
use crate::service::error::ConvertError;

/// 圖片服務，將圖片重新編碼為 JPEG
pub struct ImageService {
    quality: u8,
}

impl ImageService {
    pub fn new(quality: u8) -> Self {
        ImageService {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn recode_to_jpeg(&self, input: &Path, output: &Path) -> Result<String, ConvertError> {
        let img = image::open(input)?;
        // JPEG 不支援透明通道
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        let mut writer = BufWriter::new(File::create(output)?);
        let mut encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);
        encoder.encode_image(&rgb)?;
        drop(encoder);
        writer.flush()?;

        info!(
            "圖片轉換完成：{} -> {}，尺寸：{}x{}，品質：{}",
            input.display(),
            output.display(),
            width,
            height,
            self.quality
        );
        Ok(format!(
            "Image converted successfully: {} ({}x{})",
            output.display(),
            width,
            height
        ))
    }
}
