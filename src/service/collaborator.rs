use std::path::Path;
use crate::config::ports::AppConfig;
use crate::models::capability::Capability;
use crate::models::conversion::ConversionJob;
use crate::service::archive::ArchiveService;
use crate::service::docx::DocxService;
use crate::service::error::ConvertError;
use crate::service::html::HtmlService;
use crate::service::image::ImageService;
use crate::service::media::MediaService;
use crate::service::pdf::PdfService;
use crate::service::traits::i_service::CollaboratorServiceTrait;

/// 依協作者種類將工作交給對應的服務
pub struct CollaboratorService {
    image_service: ImageService,
    pdf_service: PdfService,
    docx_service: DocxService,
    html_service: HtmlService,
    media_service: MediaService,
    archive_service: ArchiveService,
}

impl CollaboratorService {
    pub fn new(config: &AppConfig) -> Self {
        CollaboratorService {
            image_service: ImageService::new(config.jpeg_quality),
            pdf_service: PdfService::new(),
            docx_service: DocxService::new(),
            html_service: HtmlService::new(config.tools.chromium.clone()),
            media_service: MediaService::new(config.tools.ffmpeg.clone()),
            archive_service: ArchiveService::new(config.tools.unrar.clone()),
        }
    }
}

impl CollaboratorServiceTrait for CollaboratorService {
    fn execute(&self, job: &ConversionJob) -> Result<String, ConvertError> {
        let input = job.input_path.as_path();
        if job.capability == Capability::PdfText {
            return self.pdf_service.extract_text(input);
        }

        let output = output_of(job)?;
        match job.capability {
            Capability::ImageRecode => self.image_service.recode_to_jpeg(input, output),
            Capability::DocxToHtml => self.docx_service.convert_to_html(input, output),
            Capability::HtmlToPdf => self.html_service.render_to_pdf(input, output),
            Capability::VideoToAudio => self.media_service.extract_mp3(input, output),
            Capability::ZipExtract => self.archive_service.extract_zip(input, output),
            Capability::RarExtract => self.archive_service.extract_rar(input, output),
            Capability::PdfText => self.pdf_service.extract_text(input),
        }
    }
}

fn output_of(job: &ConversionJob) -> Result<&Path, ConvertError> {
    job.output_path.as_deref().ok_or_else(|| {
        ConvertError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{:?} 缺少輸出路徑", job.capability),
        ))
    })
}
