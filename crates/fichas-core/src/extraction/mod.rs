pub mod docx;
pub mod text;

use crate::error::FichasError;
use crate::ExtractOptions;
use std::path::Path;

/// Trait for document-to-text backends.
pub trait DocumentExtractor: Send + Sync {
    /// Recover plain text from the raw document bytes.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, FichasError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Pick a backend from the file extension.
pub fn extractor_for(file_name: &str) -> Option<Box<dyn DocumentExtractor>> {
    match file_extension(file_name)?.as_str() {
        "docx" => Some(Box::new(docx::DocxExtractor::new())),
        "txt" => Some(Box::new(text::PlainTextExtractor::new())),
        _ => None,
    }
}

fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Reject uploads with a disallowed extension or above the size limit.
pub fn validate_upload(file_name: &str, size: u64, options: &ExtractOptions) -> Result<(), FichasError> {
    let allowed = file_extension(file_name)
        .map(|ext| options.allowed_extensions.iter().any(|a| a.eq_ignore_ascii_case(&ext)))
        .unwrap_or(false);
    if !allowed {
        return Err(FichasError::UnsupportedFile(file_name.to_string()));
    }

    if size > options.max_file_bytes {
        return Err(FichasError::FileTooLarge {
            size,
            max: options.max_file_bytes,
        });
    }

    Ok(())
}

/// Reject empty or implausibly short document text.
pub fn ensure_plausible_text(text: &str, options: &ExtractOptions) -> Result<(), FichasError> {
    let chars = text.trim().chars().count();
    if chars < options.min_text_chars {
        return Err(FichasError::TextTooShort {
            chars,
            min: options.min_text_chars,
        });
    }
    Ok(())
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
