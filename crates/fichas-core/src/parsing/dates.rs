use crate::model::IsoDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `D/M/YYYY` with one- or two-digit day and month.
static RE_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").expect("valid date regex"));

/// Build an `IsoDate` from captures whose groups 1..=3 are day, month, year.
pub(crate) fn date_from_captures(caps: &Captures<'_>) -> Option<IsoDate> {
    let day = caps.get(1)?.as_str();
    let month = caps.get(2)?.as_str();
    let year = caps.get(3)?.as_str();
    Some(IsoDate::from_parts(day, month, year))
}

/// Every date-shaped token in `text`, in order of appearance.
pub fn find_dates(text: &str) -> Vec<IsoDate> {
    RE_DATE
        .captures_iter(text)
        .filter_map(|caps| date_from_captures(&caps))
        .collect()
}

/// The last date-shaped token in `text`.
pub fn last_date(text: &str) -> Option<IsoDate> {
    find_dates(text).pop()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_not_checked_against_calendar() {
        let dates = find_dates("vence 31/2/2025");
        assert_eq!(dates[0].as_str(), "2025-02-31");
    }

    #[test]
    fn test_find_dates_in_order() {
        let dates = find_dates("de 1/2/2024 a 28/02/2024, revisado 5/3/2024");
        let dates: Vec<&str> = dates.iter().map(|d| d.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-01", "2024-02-28", "2024-03-05"]);
    }

    #[test]
    fn test_last_date() {
        assert_eq!(
            last_date("creado 1/2/2024 modificado 9/10/2024").unwrap().as_str(),
            "2024-10-09"
        );
        assert!(last_date("sin fechas").is_none());
    }

    #[test]
    fn test_two_digit_year_is_not_a_date() {
        assert!(find_dates("1/2/24").is_empty());
    }
}
