use fichas_core::classify::score_scope;
use fichas_core::error::FichasError;
use fichas_core::extraction::extractor_for;
use fichas_core::model::TerritorialScope;
use serde::Serialize;
use std::path::PathBuf;

use crate::commands::{file_name, resolve_cue_set};
use crate::output;

#[derive(Serialize)]
struct ScopeReport<'a> {
    file: &'a str,
    cue_set: &'a str,
    scores: &'a fichas_core::classify::ScopeScores,
    decision: Option<TerritorialScope>,
}

pub fn run(
    input_file: PathBuf,
    cues: Option<PathBuf>,
    output_format: &str,
) -> Result<(), FichasError> {
    let name = file_name(&input_file);
    let extractor = extractor_for(&name).ok_or_else(|| FichasError::UnsupportedFile(name.clone()))?;
    let cues = resolve_cue_set(cues.as_deref())?;

    let bytes = std::fs::read(&input_file)?;
    let text = extractor.extract_text(&bytes)?;

    let scores = score_scope(&text, &cues);
    let decision = scores.decide();

    match output_format {
        "json" => output::json::print(&ScopeReport {
            file: &name,
            cue_set: &cues.name,
            scores: &scores,
            decision,
        })?,
        _ => output::table::print_scope(&name, &cues.name, &scores, decision),
    }

    Ok(())
}
