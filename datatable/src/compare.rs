//! Three-tier value comparison used for column sorting.
//!
//! Values compare numerically when both are numbers, by instant when both
//! parse as calendar dates, and otherwise as locale-style strings of their
//! display form (`Null` displays as the empty string).
//!
//! Column sorting uses [`compare_ranked`], which keeps those rules for keys
//! of the same kind and orders keys of different kinds by [`KeyKind`].

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Utc;

use crate::value::Value;

/// Date-time layouts accepted without an explicit offset (read as UTC).
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts, read as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a string as a calendar date or date-time.
///
/// Accepts RFC 3339, RFC 2822 and the layouts in [`DATETIME_FORMATS`] and
/// [`DATE_FORMATS`]. Returns `None` for anything else.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

/// Locale-style string ordering.
///
/// Letters compare case-insensitively first; when two strings differ only by
/// case the lowercase form sorts first; code-point order breaks any
/// remaining tie.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary
        .then_with(|| {
            a.chars()
                .map(|c| c.is_uppercase())
                .cmp(b.chars().map(|c| c.is_uppercase()))
        })
        .then_with(|| a.cmp(b))
}

/// Compare two numbers; NaN sorts after every other number.
fn compare_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Pre-computed comparison forms of a single value.
///
/// Parsing dates and formatting strings once per row keeps sorting at
/// `O(n log n)` comparisons of cached keys.
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    number: Option<f64>,
    date: Option<DateTime<Utc>>,
    text: String,
}

impl SortKey {
    /// Build the key for a value.
    pub fn new(value: &Value) -> Self {
        let date = match value {
            Value::DateTime(dt) => Some(*dt),
            Value::String(s) => parse_date(s),
            _ => None,
        };
        Self {
            number: value.as_f64(),
            date,
            text: value.to_string(),
        }
    }

    /// Which kind this key sorts as.
    pub fn kind(&self) -> KeyKind {
        if self.number.is_some() {
            KeyKind::Number
        } else if self.date.is_some() {
            KeyKind::Date
        } else if self.text.is_empty() {
            KeyKind::Blank
        } else {
            KeyKind::Text
        }
    }

    /// True for values that are neither numbers nor dates and display as "".
    pub fn is_blank(&self) -> bool {
        self.kind() == KeyKind::Blank
    }
}

/// Compare two keys with the pairwise three-tier rule.
pub fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
    if let (Some(x), Some(y)) = (a.number, b.number) {
        return compare_numbers(x, y);
    }
    if let (Some(x), Some(y)) = (a.date, b.date) {
        return x.cmp(&y);
    }
    locale_cmp(&a.text, &b.text)
}

/// Compare two values with the pairwise three-tier rule.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    compare_keys(&SortKey::new(a), &SortKey::new(b))
}

/// Kind of a sort key, in ascending sort order.
///
/// Keys of the same kind compare with their own rule. Keys of different
/// kinds compare by rank alone, so a column mixing numbers with text
/// placeholders still has a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyKind {
    /// Null or empty text.
    Blank,
    Number,
    Date,
    Text,
}

/// Total order over sort keys: kind rank first, then the rule of that kind.
pub fn compare_ranked(a: &SortKey, b: &SortKey) -> Ordering {
    let (kind_a, kind_b) = (a.kind(), b.kind());
    if kind_a != kind_b {
        return kind_a.cmp(&kind_b);
    }

    match (a.number, b.number, a.date, b.date) {
        (Some(x), Some(y), _, _) => compare_numbers(x, y),
        (_, _, Some(x), Some(y)) => x.cmp(&y),
        _ => locale_cmp(&a.text, &b.text),
    }
}
