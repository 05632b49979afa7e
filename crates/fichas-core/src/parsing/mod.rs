pub mod dates;
pub mod fields;

use crate::classify::{classify_modality, classify_scope};
use crate::cues::builtin::default_cue_set;
use crate::cues::CueSet;
use crate::model::ExtractedFields;
use fields::{extract_advertising_phrase, extract_expiry_date, extract_other_data, extract_title};

/// Extract every recognizable field from document text using the builtin
/// cue table.
///
/// Never fails: fields whose patterns do not match are left unset.
pub fn extract_fields(text: &str) -> ExtractedFields {
    extract_fields_with(text, default_cue_set())
}

/// Same as [`extract_fields`] with a caller-supplied cue table.
pub fn extract_fields_with(text: &str, cues: &CueSet) -> ExtractedFields {
    let other = extract_other_data(text);

    let fields = ExtractedFields {
        title: extract_title(text),
        advertising_phrase: extract_advertising_phrase(text),
        expiry_date: extract_expiry_date(text),
        submission_modality: classify_modality(text),
        territorial_scope: classify_scope(text, cues),
        drafting_date: other.drafting_date,
        drafted_by_raw: other.drafted_by_raw,
    };

    tracing::debug!(
        chars = text.chars().count(),
        present = fields.present_count(),
        "fields extracted"
    );

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SubmissionModality, TerritorialScope};

    #[test]
    fn test_empty_text_yields_empty_record() {
        assert_eq!(extract_fields(""), ExtractedFields::default());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Nombre de la ayuda: Bono Joven Organismo: Ministerio de Vivienda \
                    Fecha fin: 1/9/2025 Lugar y forma de presentación: Electrónicamente en: \
                    https://sede.mivau.gob.es Otros datos: 3/3/2025 Usuario: Laura";
        assert_eq!(extract_fields(text), extract_fields(text));
    }

    #[test]
    fn test_full_record_from_collapsed_text() {
        let text = "Nombre de la ayuda: Bono Joven Organismo: Ministerio de Vivienda \
                    Fecha fin: 1/9/2025 Lugar y forma de presentación: Electrónicamente en: \
                    https://sede.mivau.gob.es Otros datos: 3/3/2025 Usuario: Laura";
        let fields = extract_fields(text);
        assert_eq!(fields.title.as_deref(), Some("Bono Joven"));
        assert_eq!(fields.expiry_date.unwrap().as_str(), "2025-09-01");
        assert_eq!(fields.submission_modality, Some(SubmissionModality::Online));
        assert_eq!(fields.territorial_scope, Some(TerritorialScope::State));
        assert_eq!(fields.drafting_date.unwrap().as_str(), "2025-03-03");
        assert_eq!(fields.drafted_by_raw.as_deref(), Some("Laura"));
        assert_eq!(fields.advertising_phrase, None);
    }
}
