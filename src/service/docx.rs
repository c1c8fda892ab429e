use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;
use log::{debug, info};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;
use crate::service::error::ConvertError;
use crate::utils::html::{escape_html, wrap_document};

const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX 服務，將 Word 文件轉為 HTML
pub struct DocxService;

impl DocxService {
    pub fn new() -> Self {
        DocxService
    }

    pub fn convert_to_html(&self, input: &Path, output: &Path) -> Result<String, ConvertError> {
        let data = fs::read(input)?;
        let body = docx_to_html_body(&data)?;
        let title = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let html = wrap_document(&title, &body);
        fs::write(output, &html)?;
        info!("生成 HTML 檔案：{}，大小：{} 位元組", output.display(), html.len());
        Ok("DOCX converted to HTML successfully.".to_string())
    }
}

impl Default for DocxService {
    fn default() -> Self {
        Self::new()
    }
}

/// 讀取 DOCX（ZIP 容器）中的 word/document.xml 並轉為 HTML 片段
pub fn docx_to_html_body(data: &[u8]) -> Result<String, ConvertError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut xml = String::new();
    match archive.by_name(DOCUMENT_PART) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => {
            return Err(ConvertError::MissingPart {
                part: DOCUMENT_PART.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    }
    debug!("讀取 {}，大小：{} 位元組", DOCUMENT_PART, xml.len());
    document_xml_to_html(&xml)
}

#[derive(Default, Clone, Copy)]
struct RunFormat {
    bold: bool,
    italic: bool,
    underline: bool,
}

impl RunFormat {
    fn wrap(&self, text: &str) -> String {
        let mut out = escape_html(text);
        if self.underline {
            out = format!("<u>{}</u>", out);
        }
        if self.italic {
            out = format!("<em>{}</em>", out);
        }
        if self.bold {
            out = format!("<strong>{}</strong>", out);
        }
        out
    }
}

struct Paragraph {
    tag: &'static str,
    content: String,
    // 文字方塊內的段落結束後要還原外層 run 的格式
    outer_run: RunFormat,
}

/// 將 WordprocessingML 主文件轉為 HTML 片段
pub fn document_xml_to_html(xml: &str) -> Result<String, ConvertError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut body = String::new();
    // 文字方塊（w:txbxContent）會在段落中再開段落
    let mut paragraphs: Vec<Paragraph> = Vec::new();
    let mut run = RunFormat::default();
    let mut in_run_props = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(Paragraph {
                    tag: "p",
                    content: String::new(),
                    outer_run: run,
                }),
                b"w:r" => run = RunFormat::default(),
                b"w:rPr" => in_run_props = true,
                b"w:t" => in_text = true,
                b"w:tbl" => body.push_str("<table>\n"),
                b"w:tr" => body.push_str("<tr>"),
                b"w:tc" => body.push_str("<td>"),
                _ => apply_property(&e, &mut paragraphs, &mut run, in_run_props)?,
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:br" => push_content(&mut paragraphs, &mut body, "<br />"),
                b"w:tab" => push_content(&mut paragraphs, &mut body, "\t"),
                _ => apply_property(&e, &mut paragraphs, &mut run, in_run_props)?,
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(p) = paragraphs.pop() {
                        run = p.outer_run;
                        if !p.content.trim().is_empty() {
                            match paragraphs.last_mut() {
                                Some(outer) => {
                                    outer.content.push_str(&format!("<span>{}</span>", p.content))
                                }
                                None => body.push_str(&format!(
                                    "<{tag}>{}</{tag}>\n",
                                    p.content,
                                    tag = p.tag
                                )),
                            }
                        }
                    }
                }
                b"w:rPr" => in_run_props = false,
                b"w:t" => in_text = false,
                b"w:tbl" => body.push_str("</table>\n"),
                b"w:tr" => body.push_str("</tr>\n"),
                b"w:tc" => body.push_str("</td>"),
                _ => {}
            },
            Event::Text(e) if in_text => {
                let text = e.unescape()?;
                let formatted = run.wrap(&text);
                push_content(&mut paragraphs, &mut body, &formatted);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(body)
}

fn push_content(paragraphs: &mut [Paragraph], body: &mut String, fragment: &str) {
    match paragraphs.last_mut() {
        Some(p) => p.content.push_str(fragment),
        None => body.push_str(fragment),
    }
}

// 段落樣式與字元格式
fn apply_property(
    e: &BytesStart<'_>,
    paragraphs: &mut [Paragraph],
    run: &mut RunFormat,
    in_run_props: bool,
) -> Result<(), ConvertError> {
    match e.name().as_ref() {
        b"w:pStyle" => {
            if let (Some(p), Some(style)) = (paragraphs.last_mut(), attribute_value(e)?) {
                p.tag = heading_tag(&style);
            }
        }
        b"w:b" if in_run_props => run.bold = is_enabled(attribute_value(e)?.as_deref()),
        b"w:i" if in_run_props => run.italic = is_enabled(attribute_value(e)?.as_deref()),
        b"w:u" if in_run_props => {
            run.underline = !matches!(attribute_value(e)?.as_deref(), Some("none"))
        }
        _ => {}
    }
    Ok(())
}

fn attribute_value(e: &BytesStart<'_>) -> Result<Option<String>, ConvertError> {
    match e.try_get_attribute("w:val")? {
        Some(attr) => Ok(Some(attr.unescape_value()?.to_string())),
        None => Ok(None),
    }
}

fn is_enabled(val: Option<&str>) -> bool {
    !matches!(val, Some("0") | Some("false") | Some("off"))
}

fn heading_tag(style: &str) -> &'static str {
    match style {
        "Title" | "Heading1" => "h1",
        "Heading2" => "h2",
        "Heading3" => "h3",
        "Heading4" => "h4",
        "Heading5" => "h5",
        "Heading6" => "h6",
        _ => "p",
    }
}
