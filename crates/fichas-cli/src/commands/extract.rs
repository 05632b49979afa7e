use fichas_core::error::FichasError;
use fichas_core::extraction::extractor_for;
use fichas_core::model::FichaDraft;
use fichas_core::workers::{load_workers, resolve_drafted_by};
use fichas_core::ExtractOptions;
use std::path::PathBuf;

use crate::commands::{file_name, resolve_cue_set};
use crate::output;

pub struct ExtractArgs {
    pub input_file: PathBuf,
    pub output_format: String,
    pub out: Option<PathBuf>,
    pub workers: Option<PathBuf>,
    pub cues: Option<PathBuf>,
    pub min_chars: usize,
    pub max_bytes: u64,
}

pub fn run(args: ExtractArgs) -> Result<(), FichasError> {
    let name = file_name(&args.input_file);
    let extractor = extractor_for(&name).ok_or_else(|| FichasError::UnsupportedFile(name.clone()))?;

    let options = ExtractOptions {
        min_text_chars: args.min_chars,
        max_file_bytes: args.max_bytes,
        allowed_extensions: vec!["docx".into(), "txt".into()],
    };
    let cues = resolve_cue_set(args.cues.as_deref())?;

    let bytes = std::fs::read(&args.input_file)?;
    tracing::info!(file = %name, backend = extractor.backend_name(), bytes = bytes.len(), "extracting");
    let fields = fichas_core::extract_document(&name, &bytes, extractor.as_ref(), &cues, &options)?;

    let draft = match args.workers.as_deref() {
        Some(path) => {
            let directory = load_workers(path)?;
            resolve_drafted_by(&fields, &directory)
        }
        None => FichaDraft::from_fields(&fields),
    };

    match args.out {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&draft)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Extracted {} field(s) from {}, written to {}",
                fields.present_count(),
                name,
                path.display()
            );
            if fields.drafted_by_raw.is_some() && draft.drafted_by.is_none() {
                eprintln!("  warning: drafter name was not resolved to a worker");
            }
        }
        None => match args.output_format.as_str() {
            "json" => output::json::print(&draft)?,
            _ => output::table::print_extraction(&name, &fields, &draft),
        },
    }

    Ok(())
}
