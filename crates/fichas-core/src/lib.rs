pub mod classify;
pub mod cues;
pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod workers;

use cues::CueSet;
use error::FichasError;
use extraction::DocumentExtractor;
use model::{ExtractedFields, FichaDraft};
use workers::WorkerDirectory;

pub use parsing::{extract_fields, extract_fields_with};

/// Default lower bound on recovered text length.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 50;
/// Default upload size limit (10 MiB).
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Options controlling document intake.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Reject documents whose text has fewer characters than this.
    pub min_text_chars: usize,
    /// Reject uploads larger than this many bytes.
    pub max_file_bytes: u64,
    /// Accepted file extensions, without the dot.
    pub allowed_extensions: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            allowed_extensions: vec!["docx".into()],
        }
    }
}

/// Validate an upload, recover its text and extract the known fields.
///
/// Fails only on intake problems (extension, size, unreadable document,
/// too little text); a document with no recognizable field yields an
/// empty `ExtractedFields`.
pub fn extract_document(
    file_name: &str,
    bytes: &[u8],
    extractor: &dyn DocumentExtractor,
    cues: &CueSet,
    options: &ExtractOptions,
) -> Result<ExtractedFields, FichasError> {
    extraction::validate_upload(file_name, bytes.len() as u64, options)?;

    let text = extractor.extract_text(bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        file = file_name,
        chars = text.chars().count(),
        "document text recovered"
    );
    extraction::ensure_plausible_text(&text, options)?;

    Ok(parsing::extract_fields_with(&text, cues))
}

/// Main API entry point: turn an uploaded document into a ficha draft.
///
/// The raw drafter name is resolved against `directory` when one is given;
/// without a directory the drafter is left out of the draft.
pub fn process_document(
    file_name: &str,
    bytes: &[u8],
    extractor: &dyn DocumentExtractor,
    directory: Option<&dyn WorkerDirectory>,
    cues: &CueSet,
    options: &ExtractOptions,
) -> Result<FichaDraft, FichasError> {
    let fields = extract_document(file_name, bytes, extractor, cues, options)?;

    let draft = match directory {
        Some(directory) => workers::resolve_drafted_by(&fields, directory),
        None => FichaDraft::from_fields(&fields),
    };

    Ok(draft)
}
