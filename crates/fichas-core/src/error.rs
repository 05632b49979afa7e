use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum FichasError {
    #[error("document text extraction failed: {0}")]
    Extraction(String),

    #[error("unsupported file: {0}. Only .docx documents are accepted.")]
    UnsupportedFile(String),

    #[error("file is too large ({size} bytes, maximum is {max} bytes)")]
    FileTooLarge { size: u64, max: u64 },

    #[error("document text is empty or too short ({chars} characters, need at least {min})")]
    TextTooShort { chars: usize, min: usize },

    #[error("failed to load cue table from {path}: {reason}")]
    CueSetLoad { path: PathBuf, reason: String },

    #[error("invalid cue table: {0}")]
    CueSetInvalid(String),

    #[error("worker directory error: {0}")]
    WorkerDirectory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
