use chrono::{Datelike, NaiveDate};

/// Weekday abbreviations, Sunday first.
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Accepted date layouts: `dd/mm/yyyy` and `yyyy-mm-dd`.
const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

const LABEL_PREFIXES: [[&str; 2]; 7] = [
    ["dom", "sun"],
    ["seg", "mon"],
    ["ter", "tue"],
    ["qua", "wed"],
    ["qui", "thu"],
    ["sex", "fri"],
    ["sab", "sat"],
];

/// Parses either accepted layout. The year must have four digits, so
/// "15/10/25" is rejected rather than read as year 25.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if !has_full_year(date) {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
}

fn has_full_year(date: &str) -> bool {
    let year = if date.contains('/') {
        date.rsplit('/').next()
    } else {
        date.split('-').next()
    };
    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}

/// Sunday-first slot (0..7) of a calendar date string.
pub fn weekday_slot_for_date(date: &str) -> Option<usize> {
    parse_date(date).map(|d| d.weekday().num_days_from_sunday() as usize)
}

/// Weekday abbreviation for a date string, `None` when it cannot be parsed.
pub fn weekday_for_date(date: &str) -> Option<&'static str> {
    weekday_slot_for_date(date).map(|slot| WEEKDAY_ABBREVIATIONS[slot])
}

/// Sunday-first slot of a stored weekday label such as "segunda",
/// "Sábado" or "Qua". Matching is on the first three letters, ignoring case
/// and accents.
pub fn weekday_slot_for_label(label: &str) -> Option<usize> {
    let prefix: String = label
        .trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .take(3)
        .collect();

    if prefix.chars().count() < 3 {
        return None;
    }

    LABEL_PREFIXES
        .iter()
        .position(|names| names.contains(&prefix.as_str()))
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        other => other,
    }
}
