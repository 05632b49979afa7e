use crate::error::FichasError;
use crate::extraction::DocumentExtractor;

/// Backend for text that has already been recovered from a document.
///
/// Line breaks are kept, so line-sensitive patterns see the original layout.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        PlainTextExtractor
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, FichasError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(text.trim_start_matches('\u{feff}').to_string())
    }

    fn backend_name(&self) -> &str {
        "text"
    }
}
