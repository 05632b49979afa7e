use serde::{Deserialize, Serialize};
use std::fmt;

/// Administrative level that issues or governs an aid program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TerritorialScope {
    #[serde(rename = "EU")]
    Eu,
    State,
    Region,
    Province,
}

impl fmt::Display for TerritorialScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerritorialScope::Eu => write!(f, "EU"),
            TerritorialScope::State => write!(f, "STATE"),
            TerritorialScope::Region => write!(f, "REGION"),
            TerritorialScope::Province => write!(f, "PROVINCE"),
        }
    }
}

/// How applicants may submit their application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionModality {
    Online,
    InPerson,
    Mixed,
}

impl fmt::Display for SubmissionModality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionModality::Online => write!(f, "online"),
            SubmissionModality::InPerson => write!(f, "in_person"),
            SubmissionModality::Mixed => write!(f, "mixed"),
        }
    }
}

/// A calendar date in zero-padded `YYYY-MM-DD` textual form.
///
/// The components are only reordered and padded, never validated against
/// the calendar.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsoDate(String);

impl IsoDate {
    pub fn from_parts(day: &str, month: &str, year: &str) -> IsoDate {
        IsoDate(format!("{year}-{month:0>2}-{day:0>2}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Best-effort structured record recovered from a document's text.
///
/// Every field is independently optional: a missing pattern match leaves
/// it `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertising_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_modality: Option<SubmissionModality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territorial_scope: Option<TerritorialScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drafting_date: Option<IsoDate>,
    /// Unvalidated name captured from the "usuario" label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drafted_by_raw: Option<String>,
}

impl ExtractedFields {
    /// Number of fields that were recognized.
    pub fn present_count(&self) -> usize {
        [
            self.title.is_some(),
            self.advertising_phrase.is_some(),
            self.expiry_date.is_some(),
            self.submission_modality.is_some(),
            self.territorial_scope.is_some(),
            self.drafting_date.is_some(),
            self.drafted_by_raw.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// Partial ficha handed to the creation form, after worker resolution.
///
/// Serializes with only the present keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FichaDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advertising_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_modality: Option<SubmissionModality>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub territorial_scope: Option<TerritorialScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drafting_date: Option<IsoDate>,
    /// Identifier of the worker the raw "usuario" name resolved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drafted_by: Option<i64>,
}

impl FichaDraft {
    /// Build a draft from extracted fields, leaving `drafted_by` unresolved.
    pub fn from_fields(fields: &ExtractedFields) -> FichaDraft {
        FichaDraft {
            title: fields.title.clone(),
            advertising_phrase: fields.advertising_phrase.clone(),
            expiry_date: fields.expiry_date.clone(),
            submission_modality: fields.submission_modality,
            territorial_scope: fields.territorial_scope,
            drafting_date: fields.drafting_date.clone(),
            drafted_by: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_date_pads_day_and_month() {
        assert_eq!(IsoDate::from_parts("3", "4", "2025").as_str(), "2025-04-03");
        assert_eq!(IsoDate::from_parts("15", "06", "2025").as_str(), "2025-06-15");
    }

    #[test]
    fn enums_serialize_to_exact_values() {
        assert_eq!(serde_json::to_string(&TerritorialScope::Eu).unwrap(), "\"EU\"");
        assert_eq!(
            serde_json::to_string(&TerritorialScope::Province).unwrap(),
            "\"PROVINCE\""
        );
        assert_eq!(
            serde_json::to_string(&SubmissionModality::InPerson).unwrap(),
            "\"in_person\""
        );
    }

    #[test]
    fn draft_serializes_only_present_keys() {
        let draft = FichaDraft {
            title: Some("Ayuda".into()),
            drafted_by: Some(7),
            ..Default::default()
        };
        let json = serde_json::to_value(&draft).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["title"], "Ayuda");
        assert_eq!(obj["draftedBy"], 7);
    }

    #[test]
    fn present_count_counts_set_fields() {
        let fields = ExtractedFields {
            title: Some("x".into()),
            territorial_scope: Some(TerritorialScope::State),
            ..Default::default()
        };
        assert_eq!(fields.present_count(), 2);
        assert_eq!(ExtractedFields::default().present_count(), 0);
    }
}
