use crate::error::FichasError;
use crate::extraction::{collapse_whitespace, DocumentExtractor};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// Main document part inside the OOXML package.
const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX backend: unzips the package and flattens `word/document.xml`.
///
/// Output is a single line: paragraphs, tabs and breaks become spaces and
/// every whitespace run is collapsed.
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        DocxExtractor
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for DocxExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, FichasError> {
        let xml = read_document_part(bytes)?;
        let raw = document_xml_to_text(&xml)?;
        Ok(collapse_whitespace(&raw))
    }

    fn backend_name(&self) -> &str {
        "docx"
    }
}

fn read_document_part(bytes: &[u8]) -> Result<String, FichasError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| FichasError::Extraction(format!("not a valid DOCX package: {e}")))?;
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| FichasError::Extraction(format!("{DOCUMENT_PART} not found: {e}")))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| FichasError::Extraction(format!("failed to read {DOCUMENT_PART}: {e}")))?;
    Ok(xml)
}

/// Concatenate the text runs (`w:t`) of a WordprocessingML body.
fn document_xml_to_text(xml: &str) -> Result<String, FichasError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::with_capacity(xml.len() / 4);
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text_run = true;
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" | b"tr" => out.push(' '),
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if matches!(e.local_name().as_ref(), b"tab" | b"br" | b"cr") {
                    out.push(' ');
                }
            }
            Ok(Event::Text(e)) if in_text_run => {
                let text = e.unescape().map_err(|err| {
                    FichasError::Extraction(format!("invalid text in {DOCUMENT_PART}: {err}"))
                })?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FichasError::Extraction(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(out)
}
