use crate::model::IsoDate;
use crate::parsing::dates::{date_from_captures, last_date};
use regex::Regex;
use std::sync::LazyLock;

// `.` does not cross line breaks and `$` is end of text, so a label whose
// value runs into a new line without a closing label is not captured.
static RE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Nombre de la ayuda:\s*(.+?)(?:Portales:|FRASE|Organismo|Beneficiarios|Categoría|Tipo|$)",
    )
    .expect("valid title regex")
});
static RE_ADVERTISING_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:FRASE PARA PUBLICITAR|Texto para su divulgación)[:\s]*(.+?)(?:Nombre de la ayuda:|Portales:|Organismo|Beneficiarios|Categoría|Tipo|\n|$)",
    )
    .expect("valid advertising phrase regex")
});
static RE_EXPIRY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Fecha fin:\s*([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").expect("valid expiry regex")
});
// Single-line: the section stops at the first line break after the marker.
static RE_OTHER_DATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)otros datos(.*)").expect("valid other data regex"));
// The name is a single token: it ends at the first whitespace, which is
// also what separates paragraphs once DOCX text is collapsed.
static RE_USUARIO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)usuario\s*:?\s*([^\n]+?)(?:\s+|$)").expect("valid usuario regex")
});

fn trimmed_capture(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    let value = caps.get(1)?.as_str().trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Aid program name after "Nombre de la ayuda:".
pub fn extract_title(text: &str) -> Option<String> {
    trimmed_capture(&RE_TITLE, text)
}

/// Promotional text after "FRASE PARA PUBLICITAR" or
/// "Texto para su divulgación", up to the next label or line break.
pub fn extract_advertising_phrase(text: &str) -> Option<String> {
    trimmed_capture(&RE_ADVERTISING_PHRASE, text)
}

/// First "Fecha fin:" date.
pub fn extract_expiry_date(text: &str) -> Option<IsoDate> {
    let caps = RE_EXPIRY_DATE.captures(text)?;
    date_from_captures(&caps)
}

/// Text following the "otros datos" marker, up to the end of its line.
pub fn locate_other_data_section(text: &str) -> Option<&str> {
    RE_OTHER_DATA
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Drafting date and raw drafter name from the "otros datos" section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtherData {
    pub drafting_date: Option<IsoDate>,
    pub drafted_by_raw: Option<String>,
}

/// The drafting date is the last date in the section; the drafter is the
/// text after "usuario" up to the next whitespace or the section end.
pub fn extract_other_data(text: &str) -> OtherData {
    match locate_other_data_section(text) {
        Some(section) => OtherData {
            drafting_date: last_date(section),
            drafted_by_raw: trimmed_capture(&RE_USUARIO, section),
        },
        None => OtherData::default(),
    }
}
