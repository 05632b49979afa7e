use fichas_core::classify::ScopeScores;
use fichas_core::model::{ExtractedFields, FichaDraft, TerritorialScope};

const NOT_FOUND: &str = "-";

pub fn print_extraction(file: &str, fields: &ExtractedFields, draft: &FichaDraft) {
    println!("=== {} ===\n", file);

    let drafted_by = match (&fields.drafted_by_raw, draft.drafted_by) {
        (Some(raw), Some(id)) => format!("{} (worker #{})", raw, id),
        (Some(raw), None) => format!("{} (unresolved)", raw),
        (None, _) => NOT_FOUND.to_string(),
    };

    let rows = [
        ("Title", fields.title.clone()),
        ("Advertising phrase", fields.advertising_phrase.clone()),
        ("Expiry date", fields.expiry_date.as_ref().map(|d| d.to_string())),
        (
            "Submission modality",
            fields.submission_modality.map(|m| m.to_string()),
        ),
        (
            "Territorial scope",
            fields.territorial_scope.map(|s| s.to_string()),
        ),
        ("Drafting date", fields.drafting_date.as_ref().map(|d| d.to_string())),
        ("Drafted by", Some(drafted_by)),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(10);
    for (label, value) in &rows {
        println!(
            "  {:<width$}  {}",
            label,
            value.as_deref().unwrap_or(NOT_FOUND),
            width = width
        );
    }

    println!("\n  {} of 7 fields recognized", fields.present_count());
}

pub fn print_scope(
    file: &str,
    cue_set: &str,
    scores: &ScopeScores,
    decision: Option<TerritorialScope>,
) {
    println!("=== {} ===\n", file);
    println!("  Cue table: {}\n", cue_set);

    for scope in [
        TerritorialScope::Province,
        TerritorialScope::Region,
        TerritorialScope::State,
        TerritorialScope::Eu,
    ] {
        println!("  {:<9} {:>3}", scope.to_string(), scores.get(scope));
    }
    println!();

    if !scores.steps.is_empty() {
        println!("  Evidence:");
        for step in &scores.steps {
            println!("    {:+3} {:<9} {}", step.delta, step.scope.to_string(), step.reason);
        }
        println!();
    }

    match decision {
        Some(scope) => println!("  Decision: {}", scope),
        None => println!("  Decision: none (no cue matched)"),
    }
}
