use crate::model::SubmissionModality;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// The closing label class is case-insensitive too, so any line starting
// with a letter and containing a colon ends the section.
static RE_PRESENTATION_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)lugar y forma de presentaci[oó]n([\s\S]*?)(?:\n[A-Z][^:]*:|$)")
        .expect("valid presentation section regex")
});
static RE_IN_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)presencialmente en:").expect("valid in-person regex"));
static RE_ELECTRONIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)electr[oó]nicamente en:").expect("valid electronic regex")
});
static RE_RED_SARA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)red sara").expect("valid red sara regex"));
static RE_WEB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)sede electr[oó]nica|https?://|\.(?:cat|es|com)\b")
        .expect("valid web regex")
});
static RE_WWW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bwww\.").expect("valid www regex"));

/// Locate the "Lugar y forma de presentación" section body.
pub fn locate_presentation_section(text: &str) -> Option<&str> {
    RE_PRESENTATION_SECTION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Presence cues found in a presentation section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalitySignals {
    pub has_in_person: bool,
    pub has_electronic: bool,
    /// "Red SARA" is the only electronic channel named.
    pub only_sara: bool,
    pub has_web: bool,
}

impl ModalitySignals {
    pub fn detect(section: &str) -> ModalitySignals {
        let has_web = RE_WEB.is_match(section);
        ModalitySignals {
            has_in_person: RE_IN_PERSON.is_match(section),
            has_electronic: RE_ELECTRONIC.is_match(section),
            only_sara: RE_RED_SARA.is_match(section) && !has_web && !RE_WWW.is_match(section),
            has_web,
        }
    }

    /// First matching rule wins.
    pub fn decide(&self) -> SubmissionModality {
        if self.has_electronic && self.has_web && !self.only_sara {
            SubmissionModality::Online
        } else if self.has_in_person && self.has_electronic {
            SubmissionModality::Mixed
        } else if self.has_in_person {
            SubmissionModality::InPerson
        } else if self.has_electronic || self.only_sara {
            SubmissionModality::Online
        } else {
            SubmissionModality::Mixed
        }
    }
}

/// Infer the submission modality, or `None` when the document has no
/// presentation section.
pub fn classify_modality(text: &str) -> Option<SubmissionModality> {
    let section = locate_presentation_section(text)?;
    let signals = ModalitySignals::detect(section);
    let modality = signals.decide();
    tracing::debug!(?signals, %modality, "submission modality decided");
    Some(modality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_section_leaves_modality_unset() {
        assert_eq!(classify_modality("Presencialmente en: oficinas"), None);
    }

    #[test]
    fn test_in_person_only() {
        let text = "Lugar y forma de presentación: Presencialmente en: oficinas municipales";
        assert_eq!(classify_modality(text), Some(SubmissionModality::InPerson));
    }

    #[test]
    fn test_both_channels_without_web_is_mixed() {
        let text = "Lugar y forma de presentación: Presencialmente en: registro general. \
                    Electrónicamente en: registro";
        assert_eq!(classify_modality(text), Some(SubmissionModality::Mixed));
    }

    #[test]
    fn test_electronic_with_web_is_online_even_with_in_person() {
        let text = "Lugar y forma de presentación: Presencialmente en: registro. \
                    Electrónicamente en: https://sede.example.gob.es";
        assert_eq!(classify_modality(text), Some(SubmissionModality::Online));
    }

    #[test]
    fn test_red_sara_only_is_online() {
        let text = "Lugar y forma de presentación: a través de la Red SARA";
        let section = locate_presentation_section(text).unwrap();
        let signals = ModalitySignals::detect(section);
        assert!(signals.only_sara);
        assert!(!signals.has_web);
        assert_eq!(signals.decide(), SubmissionModality::Online);
    }

    #[test]
    fn test_red_sara_with_sede_is_not_only_sara() {
        let signals = ModalitySignals::detect("Red SARA o sede electrónica");
        assert!(!signals.only_sara);
        assert!(signals.has_web);
    }

    #[test]
    fn test_no_cues_defaults_to_mixed() {
        let text = "Lugar y forma de presentación: según indican las bases";
        assert_eq!(classify_modality(text), Some(SubmissionModality::Mixed));
    }

    #[test]
    fn test_domain_fragment_counts_as_web() {
        let signals = ModalitySignals::detect("Electrónicamente en: tramits.gencat.cat");
        assert!(signals.has_web);
        assert_eq!(signals.decide(), SubmissionModality::Online);
    }

    #[test]
    fn test_section_ends_at_next_label_line() {
        let text = "Lugar y forma de presentación: Presencialmente en: oficinas\n\
                    Plazo: Electrónicamente en: https://example.com";
        let section = locate_presentation_section(text).unwrap();
        assert!(!section.contains("Plazo"));
        assert_eq!(classify_modality(text), Some(SubmissionModality::InPerson));
    }

    #[test]
    fn test_lowercase_label_line_also_ends_section() {
        let text = "Lugar y forma de presentación\npresencialmente en: oficinas";
        assert_eq!(locate_presentation_section(text), Some(""));
        assert_eq!(classify_modality(text), Some(SubmissionModality::Mixed));
    }
}
